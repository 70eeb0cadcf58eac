use std::fmt::Write;

use crate::models::Catalog;

/// Renders the catalog as plain text. Code fragments lose their backticks.
pub fn render_plain(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", catalog.title);
    if let Some(tagline) = &catalog.tagline {
        let _ = writeln!(out, "{tagline}");
    }
    for section in &catalog.sections {
        let _ = write!(out, "\n{}\n", section.title);
        for guideline in &section.items {
            let text: String = guideline
                .fragments()
                .iter()
                .map(|fragment| fragment.text())
                .collect();
            let _ = writeln!(out, "- {text}");
        }
    }
    if let Some(footer) = &catalog.footer {
        let _ = write!(out, "\nLast updated: {}", footer.last_updated);
        if let Some(link) = &footer.link {
            let _ = write!(out, " \u{2022} {} ({})", link.label, link.href);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    #[test]
    fn strips_delimiters() {
        let mut catalog = Catalog::new("Guide");
        catalog.sections = vec![Section::new(
            "Language",
            ["Use `ui` for visibility", "Lone ` tick stays"],
        )];
        insta::assert_snapshot!(render_plain(&catalog), @r"
        Guide

        Language
        - Use ui for visibility
        - Lone ` tick stays
        ");
    }
}
