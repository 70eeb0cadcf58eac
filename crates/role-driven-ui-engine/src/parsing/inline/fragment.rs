use std::fmt;

use serde::{Deserialize, Serialize};

use super::{kinds::CodeSpan, parser::parse_spans, types::InlineNode};

/// One unit of a parsed guideline, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum TextFragment {
    /// Literal text, shown as-is.
    Plain(String),
    /// Inline code with its delimiters stripped, shown in monospace.
    Code(String),
}

impl TextFragment {
    pub fn text(&self) -> &str {
        match self {
            TextFragment::Plain(text) | TextFragment::Code(text) => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, TextFragment::Code(_))
    }
}

/// Writes the source form: code fragments are wrapped in backticks again.
impl fmt::Display for TextFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFragment::Plain(text) => f.write_str(text),
            TextFragment::Code(text) => f.write_str(&CodeSpan::wrap(text)),
        }
    }
}

/// Splits guideline text into ordered [`TextFragment`]s.
///
/// Total over all inputs: malformed markup (a lone or doubled backtick)
/// stays in the plain text around it. The empty string yields an empty
/// vector rather than a single empty `Plain`.
pub fn parse(input: &str) -> Vec<TextFragment> {
    parse_spans(0, input)
        .into_iter()
        .filter_map(|node| {
            let fragment = match node {
                InlineNode::Text(span) => TextFragment::Plain(span.slice(input, 0)?.to_string()),
                InlineNode::CodeSpan { inner, .. } => {
                    TextFragment::Code(inner.slice(input, 0)?.to_string())
                }
            };
            Some(fragment)
        })
        .collect()
}

/// Rebuilds the source text of a fragment sequence. Inverse of [`parse`].
pub fn join(fragments: &[TextFragment]) -> String {
    fragments.iter().map(ToString::to_string).collect()
}
