use dioxus::prelude::*;
use role_driven_ui_engine::Link;

#[component]
pub fn PageFooter(last_updated: String, link: Option<Link>) -> Element {
    rsx! {
        footer {
            class: "page-footer",
            p {
                "Last updated: {last_updated}"
                if let Some(Link { label, href }) = link {
                    " \u{2022} "
                    a { href: "{href}", "{label}" }
                }
            }
        }
    }
}
