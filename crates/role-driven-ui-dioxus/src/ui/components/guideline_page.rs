use dioxus::prelude::*;
use role_driven_ui_engine::Catalog;

use super::{PageFooter, SectionView};

/// The whole guideline document: title block, one card of sections, footer.
#[component]
pub fn GuidelinePage(catalog: Catalog) -> Element {
    let (highlight, rest) = catalog.title_parts();
    let highlight = highlight.map(str::to_string);
    let rest = rest.to_string();
    let Catalog {
        tagline,
        sections,
        footer,
        ..
    } = catalog;

    rsx! {
        main {
            class: "guideline-page",
            header {
                class: "page-header",
                h1 {
                    class: "page-title",
                    if let Some(highlight) = highlight {
                        span { class: "highlight", "{highlight}" }
                        br {}
                    }
                    "{rest}"
                }
                if let Some(tagline) = tagline {
                    p { class: "tagline", "{tagline}" }
                }
            }
            div {
                class: "guideline-card",
                for section in sections {
                    SectionView { title: section.title, items: section.items }
                }
                if let Some(footer) = footer {
                    PageFooter { last_updated: footer.last_updated, link: footer.link }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use role_driven_ui_engine::{Footer, Link, Section};

    fn render_page(catalog: Catalog) -> String {
        let mut dom = VirtualDom::new_with_props(GuidelinePage, GuidelinePageProps { catalog });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn renders_highlighted_title_and_tagline() {
        let mut catalog = Catalog::new("Role Driven UI and Config");
        catalog.highlight = Some("Role Driven".to_string());
        catalog.tagline = Some("Deterministic rules".to_string());
        let html = render_page(catalog);

        assert!(html.contains("<span class=\"highlight\">Role Driven</span>"));
        assert!(html.contains("UI and Config"));
        assert!(html.contains("<p class=\"tagline\">Deterministic rules</p>"));
    }

    #[test]
    fn renders_one_list_per_section() {
        let mut catalog = Catalog::new("Guide");
        catalog.sections = vec![
            Section::new("Permission Language", ["Use `ui` for visibility"]),
            Section::new("Deny Semantics", ["Deny wins", "Audit broad denies"]),
        ];
        let html = render_page(catalog);

        assert_eq!(html.matches("<section").count(), 2);
        assert_eq!(html.matches("<li class=\"guideline\">").count(), 3);
        assert!(html.contains("<h2>Permission Language</h2>"));
        assert!(html.contains("<code class=\"inline-code\">ui</code>"));
    }

    #[test]
    fn renders_footer_link() {
        let mut catalog = Catalog::new("Guide");
        catalog.footer = Some(Footer {
            last_updated: "October 2025".to_string(),
            link: Some(Link {
                label: "View on GitHub".to_string(),
                href: "#".to_string(),
            }),
        });
        let html = render_page(catalog);

        assert!(html.contains("Last updated: October 2025"));
        assert!(html.contains("<a href=\"#\">View on GitHub</a>"));
    }

    #[test]
    fn builtin_catalog_renders_every_section() {
        let catalog = Catalog::builtin();
        let expected = catalog.sections.len();
        let html = render_page(catalog);
        assert_eq!(html.matches("<section").count(), expected);
        assert!(html.contains("<code class=\"inline-code\">/me/permissions</code>"));
    }
}
