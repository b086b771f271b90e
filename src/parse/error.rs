use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};

use serde::Serialize;

use crate::position::Position;

/// Something the parser would have accepted at the point of failure.
#[derive(Serialize, Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Expected {
    Char(char),
    Eof,
}

impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{}'", c.escape_debug()),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedCharacter {
        expected: Cow<'static, [Expected]>,
        actual: Option<char>,
    },

    InvalidEscapeSequence(char),

    UnterminatedLiteral {
        delimiter: char,
    },

    EmptyAlternation,
    EmptySequence,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter { expected, actual } => {
                match actual {
                    Some(c) => write!(
                        f,
                        "encountered an unexpected character '{}'",
                        c.escape_debug()
                    )?,
                    None => write!(f, "encountered an unexpected end of input")?,
                }

                match expected.len() {
                    0 => Ok(()),
                    1 => write!(f, " (expected {})", &expected[0]),
                    2 => write!(f, " (expected {} or {})", &expected[0], &expected[1]),

                    n => {
                        write!(f, " (expected ")?;

                        for exp in &expected[..n - 1] {
                            write!(f, "{}, ", exp)?;
                        }

                        write!(f, "or {})", &expected[n - 1])
                    }
                }
            }

            Self::InvalidEscapeSequence(c) => {
                write!(f, "invalid escape sequence '\\{}'", c.escape_debug())
            }

            Self::UnterminatedLiteral { delimiter: '"' } => {
                write!(f, "the terminal is not terminated")
            }

            Self::UnterminatedLiteral { delimiter: '>' } => {
                write!(f, "the nonterminal is not terminated")
            }

            Self::UnterminatedLiteral { delimiter } => write!(
                f,
                "the literal is not terminated (expected '{}')",
                delimiter.escape_debug()
            ),

            Self::EmptyAlternation => write!(f, "the production has no alternatives"),

            Self::EmptySequence => {
                write!(f, "an alternative must contain at least one term")
            }
        }
    }
}

/// A syntax error, located at the character the parser could not accept.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    pos: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: Position) -> Self {
        Self { kind, pos }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    /// The 1-based line of the offending character.
    pub fn line(&self) -> usize {
        self.pos.line
    }

    /// The byte offset of the offending character.
    pub fn offset(&self) -> usize {
        self.pos.byte
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.kind)
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize, col: usize, byte: usize) -> Position {
        Position { byte, line, col }
    }

    #[test]
    fn test_unexpected_character_message() {
        let err = ParseError::new(
            ParseErrorKind::UnexpectedCharacter {
                expected: Cow::Borrowed(&[Expected::Char('<'), Expected::Char('"')]),
                actual: Some('a'),
            },
            at(2, 7, 15),
        );

        assert_eq!(
            err.to_string(),
            "2:7: encountered an unexpected character 'a' (expected '<' or '\\\"')"
        );
        assert_eq!(err.line(), 2);
        assert_eq!(err.offset(), 15);
    }

    #[test]
    fn test_unexpected_eof_message() {
        let kind = ParseErrorKind::UnexpectedCharacter {
            expected: vec![Expected::Char(':'), Expected::Char('='), Expected::Eof].into(),
            actual: None,
        };

        assert_eq!(
            kind.to_string(),
            "encountered an unexpected end of input (expected ':', '=', or end of input)"
        );
    }

    #[test]
    fn test_other_messages() {
        assert_eq!(
            ParseErrorKind::InvalidEscapeSequence('d').to_string(),
            "invalid escape sequence '\\d'"
        );
        assert_eq!(
            ParseErrorKind::UnterminatedLiteral { delimiter: '>' }.to_string(),
            "the nonterminal is not terminated"
        );
        assert_eq!(
            ParseErrorKind::EmptySequence.to_string(),
            "an alternative must contain at least one term"
        );
    }
}
