use dioxus::prelude::*;
use role_driven_ui_engine::Guideline;

use super::GuidelineItem;

/// One heading followed by its guidelines as an unordered list.
#[component]
pub fn SectionView(title: String, items: Vec<Guideline>) -> Element {
    rsx! {
        section {
            class: "guideline-section",
            h2 { "{title}" }
            ul {
                class: "guideline-list",
                for guideline in items {
                    GuidelineItem { guideline }
                }
            }
        }
    }
}
