//! Byte cursor for navigating XML input

use crate::error::{Location, ParseError, SyntaxError};

/// Cursor over the logical input, with line/column tracking for diagnostics.
///
/// The logical input ends at the end of the slice or at the first NUL byte,
/// whichever comes first.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    /// Create cursor from byte slice
    pub fn new(input: &'a [u8]) -> Self {
        let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
        Self {
            input: input.get(..end).unwrap_or(input),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `literal` if the remaining input starts with it
    pub fn consume_literal(&mut self, literal: &[u8]) -> bool {
        if self.starts_with(literal) {
            self.advance_by(literal.len());
            true
        } else {
            false
        }
    }

    pub fn starts_with(&self, literal: &[u8]) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Consume `expected` or fail with a located syntax error
    pub fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        if self.consume(expected) {
            Ok(())
        } else {
            Err(self.error(SyntaxError::ExpectedByte(char::from(expected))))
        }
    }

    /// Skip whitespace and `<!-- -->` comments, in any interleaving.
    ///
    /// Returns the number of bytes skipped. An unterminated comment runs to
    /// the end of input.
    pub fn skip_whitespace_and_comments(&mut self) -> usize {
        let start = self.pos;
        loop {
            while self.current().is_some_and(is_xml_space) {
                self.advance();
            }

            if !self.consume_literal(b"<!--") {
                break;
            }
            while !self.is_eof() && !self.consume_literal(b"-->") {
                self.advance();
            }
        }
        self.pos - start
    }

    /// Get current position
    pub const fn location(&self) -> Location {
        Location::new(self.pos, self.line, self.col)
    }

    /// Build a syntax error located at the current position
    pub fn error(&self, err: SyntaxError) -> ParseError {
        ParseError::syntax(err).with_location(self.location())
    }

    /// Check if at end of input
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> &'a [u8] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the logical input
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Get slice from start to current position
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}

/// Whitespace as classified by the C locale's `isspace`
pub(crate) fn is_xml_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new(b"hello");
        assert_eq!(cursor.current(), Some(b'h'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'e'));
    }

    #[test]
    fn test_cursor_stops_at_nul() {
        let cursor = Cursor::new(b"<a/>\0\0garbage");
        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.remaining(), b"<a/>");
    }

    #[test]
    fn test_skip_whitespace_and_comments() {
        let mut cursor = Cursor::new(b"  <!-- one -->\n\t<!--two-->  <a/>");
        let skipped = cursor.skip_whitespace_and_comments();
        assert_eq!(skipped, 28);
        assert_eq!(cursor.remaining(), b"<a/>");
        assert_eq!(cursor.location().line, 2);
    }

    #[test]
    fn test_skip_nothing() {
        let mut cursor = Cursor::new(b"<a/>");
        assert_eq!(cursor.skip_whitespace_and_comments(), 0);
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        let mut cursor = Cursor::new(b" <!-- never closed <a/>");
        cursor.skip_whitespace_and_comments();
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_consume_literal() {
        let mut cursor = Cursor::new(b"<?xml?>");
        assert!(!cursor.consume_literal(b"<!--"));
        assert!(cursor.consume_literal(b"<?xml"));
        assert_eq!(cursor.remaining(), b"?>");
    }

    #[test]
    fn test_expect_reports_location() {
        let mut cursor = Cursor::new(b"ab\ncd");
        cursor.advance_by(3);
        let err = cursor.expect(b'>').unwrap_err();
        assert_eq!(err.location(), Some(Location::new(3, 2, 1)));
    }

    #[test]
    fn test_cursor_slice() {
        let mut cursor = Cursor::new(b"hello world");
        let start = cursor.pos();
        cursor.advance_by(3);
        assert_eq!(cursor.slice_from(start), b"hel");
    }
}
