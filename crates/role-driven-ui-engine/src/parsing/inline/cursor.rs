/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// Operates over a string slice while reporting absolute byte positions
/// (local index plus `base`), so spans line up with the caller's text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Absolute offset of `s[0]`.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Distance from the byte after the cursor to the next `needle`.
    ///
    /// `Some(0)` means `needle` immediately follows the current byte.
    /// Returns `None` at EOF or when `needle` does not occur again.
    pub fn distance_to_next(&self, needle: u8) -> Option<usize> {
        let rest = self.s.as_bytes().get(self.i + 1..)?;
        rest.iter().position(|&b| b == needle)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. Callers must stay on char boundaries.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
