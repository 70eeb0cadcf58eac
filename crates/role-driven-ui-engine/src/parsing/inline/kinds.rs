/// Code span inline type with owned delimiter constant.
///
/// The parser asks this type what a delimiter is; it never hardcodes `` ` ``.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that opens and closes a code span.
    pub const TICK: u8 = b'`';

    /// Fewest content bytes between the ticks. An empty pair is literal text.
    pub const MIN_INNER_LEN: usize = 1;

    /// Wraps `inner` in delimiters, producing the source form of a span.
    pub fn wrap(inner: &str) -> String {
        let tick = char::from(Self::TICK);
        format!("{tick}{inner}{tick}")
    }
}
