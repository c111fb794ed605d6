//! Character cursor over expression text.

/// Position within an expression, tracked as a byte offset.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Current byte offset.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Next character, without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Consumes and returns the next character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.offset += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skips whitespace.
    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub(crate) fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while self.peek().is_some_and(&mut pred) {
            self.bump();
        }
        &self.input[start..self.offset]
    }
}
