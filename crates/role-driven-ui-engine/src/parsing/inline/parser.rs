use crate::parsing::span::Span;

use super::{cursor::Cursor, kinds::CodeSpan, types::InlineNode};

/// Splits `s` into [`InlineNode`]s.
///
/// # Arguments
/// - `base`: absolute byte offset at which `s` begins (added to every span)
/// - `s`: the guideline text to scan
///
/// # Returns
/// Nodes covering the whole input in order. Text between code spans is
/// emitted as `InlineNode::Text`; zero-length text runs are dropped, so the
/// empty string yields no nodes.
pub fn parse_spans(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_code_span(&mut cur) {
            let full = node.full();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        // Backticks are ASCII, so stepping a byte never lands a span
        // boundary inside a multi-byte char.
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None`, leaving the cursor untouched, when not at a backtick,
/// when the next backtick follows immediately (empty pair) or when no
/// closing backtick exists.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let inner_len = cur.distance_to_next(CodeSpan::TICK)?;
    if inner_len < CodeSpan::MIN_INNER_LEN {
        return None;
    }

    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();
    cur.bump_n(inner_len);
    let inner_end = cur.pos();
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
