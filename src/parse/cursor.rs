use std::borrow::Cow;
use std::iter::FusedIterator;
use std::str::Chars;

use tracing::trace;

use crate::parse::error::{Expected, ParseError, ParseErrorKind};
use crate::position::Position;

const EOF: &[Expected] = &[Expected::Eof];

#[derive(Debug, Clone)]
pub struct Cursor<'buf> {
    buf: &'buf str,
    iter: Chars<'buf>,
    pos: Position,
    prev_pos: Option<Position>,
}

impl<'buf> Cursor<'buf> {
    pub fn new(buf: &'buf str) -> Self {
        Self {
            buf,
            iter: buf.chars(),
            pos: Default::default(),
            prev_pos: None,
        }
    }

    /// Returns the position of the immediately following character.
    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Returns the position of the previously returned character.
    pub fn prev_pos(&self) -> Position {
        self.prev_pos.unwrap_or_default()
    }

    /// Returns the next character without consuming it, or `None` at the end of input.
    pub fn peek(&self) -> Option<char> {
        self.iter.clone().next()
    }

    pub fn remaining(&self) -> &'buf str {
        &self.buf[self.pos.byte..]
    }

    pub fn starts_with(&self, value: &str) -> bool {
        self.remaining().starts_with(value)
    }

    pub fn consume_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'buf str {
        let start = self.pos.byte;

        while matches!(self.peek(), Some(c) if predicate(c)) {
            self.next();
        }

        &self.buf[start..self.pos.byte]
    }

    /// Creates an error located at the next character.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos)
    }

    /// Creates an error reporting the next character (or the end of input) as unexpected.
    pub fn unexpected(&self, expected: impl Into<Cow<'static, [Expected]>>) -> ParseError {
        let err = self.error(ParseErrorKind::UnexpectedCharacter {
            expected: expected.into(),
            actual: self.peek(),
        });

        trace!(error = %err, "expectation failed");

        err
    }

    /// Consumes the next character if it is `expected`.
    pub fn expect(&mut self, expected: char) -> Result<char, ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.next();

                Ok(c)
            }

            _ => Err(self.unexpected(vec![Expected::Char(expected)])),
        }
    }

    /// Consumes `expected` character by character, failing at the first mismatch.
    pub fn expect_str(&mut self, expected: &str) -> Result<&'buf str, ParseError> {
        let start = self.pos.byte;

        for c in expected.chars() {
            self.expect(c)?;
        }

        Ok(&self.buf[start..self.pos.byte])
    }

    pub fn expect_eof(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(self.unexpected(Cow::Borrowed(EOF))),
        }
    }
}

impl<'buf> Iterator for Cursor<'buf> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.iter.next()?;

        self.prev_pos = Some(self.pos);
        self.pos.byte += c.len_utf8();

        if c == '\n' {
            self.pos.line += 1;
            self.pos.col = 1;
        } else {
            self.pos.col += 1;
        }

        Some(c)
    }
}

impl<'buf> FusedIterator for Cursor<'buf> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));

        cursor.consume_while(|_| true);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.expect('b'), Ok('b'));
        assert_eq!(cursor.next(), Some('c'));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.expect_eof(), Ok(()));

        let err = cursor.expect('a').unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::UnexpectedCharacter {
                expected: vec![Expected::Char('a')].into(),
                actual: None,
            }
        );
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_expect_does_not_consume_on_mismatch() {
        let mut cursor = Cursor::new("xy");
        let err = cursor.expect('y').unwrap_err();

        assert_eq!(
            err.kind(),
            &ParseErrorKind::UnexpectedCharacter {
                expected: vec![Expected::Char('y')].into(),
                actual: Some('x'),
            }
        );
        assert_eq!(cursor.peek(), Some('x'));
        assert!(cursor.expect_eof().is_err());
    }

    #[test]
    fn test_expect_str() {
        let mut cursor = Cursor::new("::= ::-");
        assert_eq!(cursor.expect_str("::="), Ok("::="));
        cursor.next();

        let err = cursor.expect_str("::=").unwrap_err();
        assert_eq!(err.pos().col, 7);
        assert_eq!(cursor.remaining(), "-");
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new("a\nbc\n\td");
        assert_eq!(cursor.pos(), Position { byte: 0, line: 1, col: 1 });

        cursor.consume_while(|c| c != 'd');
        assert_eq!(cursor.pos(), Position { byte: 6, line: 3, col: 2 });
        assert_eq!(cursor.prev_pos(), Position { byte: 5, line: 3, col: 1 });
        assert!(cursor.starts_with("d"));
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut cursor = Cursor::new("ä<");
        assert_eq!(cursor.next(), Some('ä'));
        assert_eq!(cursor.pos(), Position { byte: 2, line: 1, col: 2 });
        assert_eq!(cursor.remaining(), "<");
    }
}
