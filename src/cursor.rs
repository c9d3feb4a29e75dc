//! Read-only, seekable view over a token sequence.
//!
//! The cursor is the only thing the leaf classifiers read from. It never wraps
//! around and never makes partial moves: a seek that would leave `[0, len)`
//! fails with [`OutOfRange`] and leaves the position where it was.

/// A move or lookup fell outside the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutOfRange;

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    tokens: &'a [String],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token under the cursor.
    pub fn current(&self) -> Result<&'a str, OutOfRange> {
        self.peek(0)
    }

    /// Token `n` positions ahead; `peek(0)` is the current token.
    pub fn peek(&self, n: usize) -> Result<&'a str, OutOfRange> {
        let index = self.position.checked_add(n).ok_or(OutOfRange)?;
        self.tokens.get(index).map(String::as_str).ok_or(OutOfRange)
    }

    /// Token `n` positions behind the current one.
    // Part of the cursor's seek interface; no classifier looks back yet.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn peek_back(&self, n: usize) -> Result<&'a str, OutOfRange> {
        let index = self.position.checked_sub(n).ok_or(OutOfRange)?;
        self.tokens.get(index).map(String::as_str).ok_or(OutOfRange)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn advance(&mut self) -> Result<(), OutOfRange> {
        self.advance_by(1)
    }

    /// Move by `n` tokens (negative moves backwards).
    pub fn advance_by(&mut self, n: isize) -> Result<(), OutOfRange> {
        let target = self.position.checked_add_signed(n).ok_or(OutOfRange)?;
        if target >= self.tokens.len() {
            return Err(OutOfRange);
        }
        self.position = target;
        Ok(())
    }

    /// True when no token follows the current one.
    pub fn at_end(&self) -> bool {
        self.position + 1 >= self.tokens.len()
    }
}
