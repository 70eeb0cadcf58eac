use std::fmt::Write;

use crate::models::{Catalog, Guideline};
use crate::parsing::TextFragment;

/// Renders the catalog as Markdown for the catalog reader.
///
/// Plain text is backslash-escaped wherever it could be read as Markdown
/// syntax, and inline code is fenced with more backticks than it contains,
/// so descriptions read back unchanged. A highlighted title prefix is
/// written in bold.
pub fn render_markdown(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", title_markdown(catalog));
    if let Some(tagline) = &catalog.tagline {
        let _ = write!(out, "\n{}\n", escape_markdown(tagline, true));
    }

    for section in &catalog.sections {
        let _ = write!(out, "\n## {}\n", escape_markdown(&section.title, true));
        if !section.items.is_empty() {
            out.push('\n');
        }
        for guideline in &section.items {
            let _ = writeln!(out, "- {}", guideline_markdown(guideline));
        }
    }

    if let Some(footer) = &catalog.footer {
        let _ = write!(
            out,
            "\n---\n\nLast updated: {}",
            escape_markdown(&footer.last_updated, false)
        );
        if let Some(link) = &footer.link {
            let _ = write!(
                out,
                " \u{2022} [{}]({})",
                escape_markdown(&link.label, false),
                link_destination(&link.href)
            );
        }
        out.push('\n');
    }
    out
}

fn title_markdown(catalog: &Catalog) -> String {
    if let Some(highlight) = catalog.highlight.as_deref().filter(|h| !h.is_empty())
        && let Some(rest) = catalog.title.strip_prefix(highlight)
    {
        return format!(
            "**{}**{}",
            escape_markdown(highlight, false),
            escape_markdown(rest, false)
        );
    }
    escape_markdown(&catalog.title, true)
}

fn guideline_markdown(guideline: &Guideline) -> String {
    let mut out = String::new();
    for (i, fragment) in guideline.fragments().iter().enumerate() {
        match fragment {
            TextFragment::Plain(text) => out.push_str(&escape_markdown(text, i == 0)),
            TextFragment::Code(code) => out.push_str(&code_span_markdown(code)),
        }
    }
    out
}

/// Backslash-escapes characters that would otherwise open Markdown syntax.
///
/// With `line_start`, block markers at the front of the text (`-`, `+`,
/// `>`, `~`, `1.`) are escaped as well.
fn escape_markdown(text: &str, line_start: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut leading_digits = line_start;
    let mut chars = text.chars().enumerate().peekable();
    while let Some((i, c)) = chars.next() {
        let at_start = line_start && i == 0;
        let next = chars.peek().map(|&(_, n)| n);
        let escape = match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '#' => true,
            '&' => next.is_some_and(|n| n.is_ascii_alphanumeric() || n == '#'),
            '-' | '+' | '>' | '~' => at_start,
            '.' | ')' => leading_digits && i > 0,
            _ => false,
        };
        leading_digits = leading_digits && c.is_ascii_digit();
        if escape {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Fences `code` with one backtick more than its longest run of backticks.
///
/// Readers strip one space from each end of a span that starts and ends
/// with a space, so such content gets an extra space of padding.
fn code_span_markdown(code: &str) -> String {
    let longest = code
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    let pad = code.starts_with('`')
        || code.ends_with('`')
        || (code.starts_with(' ') && code.ends_with(' ') && !code.chars().all(|c| c == ' '));
    if pad {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}

fn link_destination(href: &str) -> String {
    let needs_brackets = href
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>' | '\\' | '&'));
    if !needs_brackets {
        return href.to_string();
    }
    let mut out = String::from("<");
    for c in href.chars() {
        if matches!(c, '<' | '>' | '\\' | '&') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('>');
    out
}
