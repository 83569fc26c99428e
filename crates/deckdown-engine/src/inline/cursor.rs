/// A cursor for left-to-right inline scanning.
///
/// Construct attempts clone the cursor before consuming and restore it on
/// failure, so a failed match never moves the scan position.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Remaining input from the current position.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Byte offset of `pat` within the remaining input.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.rest().find(pat)
    }

    /// Consumes and returns the next `n` bytes. `n` must land on a char
    /// boundary within the input.
    pub fn take(&mut self, n: usize) -> &'a str {
        let r = &self.s[self.i..self.i + n];
        self.i += n;
        r
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes one character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes the longest (possibly empty) run of bytes not in `stops`.
    pub fn take_until_any(&mut self, stops: &[u8]) -> &'a str {
        let n = self
            .rest()
            .bytes()
            .position(|b| stops.contains(&b))
            .unwrap_or(self.rest().len());
        self.take(n)
    }
}
