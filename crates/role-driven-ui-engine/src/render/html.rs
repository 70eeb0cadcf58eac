use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{Catalog, Footer, Guideline, Section};
use crate::parsing::TextFragment;

/// CSS class carried by every inline code element.
pub const INLINE_CODE_CLASS: &str = "inline-code";

/// Renders the catalog as an HTML fragment rooted at `<article>`.
///
/// All catalog text is escaped; the output is safe to embed in a page.
pub fn render_html(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"guidelines\">\n");
    write_header(&mut out, catalog);
    for section in &catalog.sections {
        write_section(&mut out, section);
    }
    if let Some(footer) = &catalog.footer {
        write_footer(&mut out, footer);
    }
    out.push_str("</article>\n");
    out
}

/// Renders one guideline's fragments as inline HTML.
pub fn render_fragments_html(fragments: &[TextFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            TextFragment::Plain(text) => format!("<span>{}</span>", encode_text(text)),
            TextFragment::Code(text) => format!(
                "<code class=\"{INLINE_CODE_CLASS}\">{}</code>",
                encode_text(text)
            ),
        })
        .collect()
}

fn write_header(out: &mut String, catalog: &Catalog) {
    out.push_str("<header>\n<h1>");
    match catalog.title_parts() {
        (Some(highlight), rest) => {
            let _ = write!(
                out,
                "<span class=\"highlight\">{}</span><br>{}",
                encode_text(highlight),
                encode_text(rest)
            );
        }
        (None, title) => out.push_str(&encode_text(title)),
    }
    out.push_str("</h1>\n");
    if let Some(tagline) = &catalog.tagline {
        let _ = writeln!(out, "<p class=\"tagline\">{}</p>", encode_text(tagline));
    }
    out.push_str("</header>\n");
}

fn write_section(out: &mut String, section: &Section) {
    let _ = writeln!(out, "<section>\n<h2>{}</h2>", encode_text(&section.title));
    out.push_str("<ul>\n");
    for guideline in &section.items {
        write_item(out, guideline);
    }
    out.push_str("</ul>\n</section>\n");
}

fn write_item(out: &mut String, guideline: &Guideline) {
    let _ = writeln!(
        out,
        "<li>{}</li>",
        render_fragments_html(&guideline.fragments())
    );
}

fn write_footer(out: &mut String, footer: &Footer) {
    let _ = write!(
        out,
        "<footer>\n<p>Last updated: {}",
        encode_text(&footer.last_updated)
    );
    if let Some(link) = &footer.link {
        let _ = write!(
            out,
            " \u{2022} <a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&link.href),
            encode_text(&link.label)
        );
    }
    out.push_str("</p>\n</footer>\n");
}
