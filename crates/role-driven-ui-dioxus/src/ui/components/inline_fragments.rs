use dioxus::prelude::*;
use role_driven_ui_engine::TextFragment;

/// Renders parsed guideline fragments: plain text as `span`, code as `code`.
#[component]
pub fn InlineFragments(fragments: Vec<TextFragment>) -> Element {
    rsx! {
        for fragment in fragments.into_iter() {
            {render_fragment(fragment)}
        }
    }
}

fn render_fragment(fragment: TextFragment) -> Element {
    match fragment {
        TextFragment::Plain(text) => rsx! { span { "{text}" } },
        TextFragment::Code(text) => rsx! { code { class: "inline-code", "{text}" } },
    }
}
