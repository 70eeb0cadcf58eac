use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the source text.
///
/// Variants store spans rather than text, so the source can always be
/// reconstructed by concatenating every node's full span in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Literal text, including any backticks that did not form a span.
    Text(Span),
    /// A backtick-delimited code span with at least one enclosed byte.
    CodeSpan {
        /// Full span including both backticks.
        full: Span,
        /// Content between the backticks.
        inner: Span,
    },
}

impl InlineNode {
    /// The full source range covered by this node.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(span) => *span,
            InlineNode::CodeSpan { full, .. } => *full,
        }
    }
}
