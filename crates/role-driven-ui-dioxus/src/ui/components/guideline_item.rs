use dioxus::prelude::*;
use role_driven_ui_engine::Guideline;

use super::InlineFragments;

#[component]
pub fn GuidelineItem(guideline: Guideline) -> Element {
    let fragments = guideline.fragments();

    rsx! {
        li {
            class: "guideline",
            InlineFragments { fragments }
        }
    }
}
