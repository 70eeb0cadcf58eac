/// A byte range `[start, end)` into the parsed text.
///
/// Inline nodes store spans rather than copied text so that slicing the
/// source with any span reproduces the exact characters it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s`, where `base` is the absolute offset at which `s` begins.
    ///
    /// Returns `None` if the span falls outside `s` or off a char boundary.
    pub fn slice(self, s: &str, base: usize) -> Option<&str> {
        let start = self.start.checked_sub(base)?;
        let end = self.end.checked_sub(base)?;
        s.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        // inverted spans are treated as empty rather than underflowing
        assert!(Span::new(5, 1).is_empty());
    }

    #[test]
    fn slice_with_base_offset() {
        let s = "use `ui` tokens";
        assert_eq!(Span::new(14, 16).slice(s, 10), Some("ui"));
        assert_eq!(Span::new(5, 8).slice(s, 10), None);
        assert_eq!(Span::new(10, 40).slice(s, 10), None);
    }
}
