use dioxus::prelude::*;
use role_driven_ui_engine::Catalog;

use super::components::GuidelinePage;

const GUIDELINES_CSS: &str = include_str!("assets/guidelines.css");

#[component]
pub fn App(catalog: Catalog) -> Element {
    rsx! {
        style { {GUIDELINES_CSS} }
        GuidelinePage { catalog }
    }
}
