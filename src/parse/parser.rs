use std::borrow::Cow;

use tracing::instrument;

use crate::ast::{Expression, Grammar, Nonterminal, Production, Term, Terminal};
use crate::parse::cursor::Cursor;
use crate::parse::error::{Expected, ParseError, ParseErrorKind};
use crate::parse::lexical::{is_terminal_char, is_text_char, is_whitespace, unescape};
use crate::position::Position;

const TERM_START: &[Expected] = &[Expected::Char('<'), Expected::Char('"')];
const GRAMMAR_CONTINUATION: &[Expected] = &[Expected::Char('<'), Expected::Eof];

/// A recursive-descent parser for the grammar notation, with one procedure per production:
///
/// ```text
/// <ws>          ::= (" " | "\n" | "\t")*
/// <escaped>     ::= "\" ("\"" | "n" | "t" | "\\")
/// <terminal>    ::= "\"" <terminal-char>* "\""
/// <nonterminal> ::= "<" <text-char>* ">"
/// <term>        ::= <nonterminal> | <terminal>
/// <expression>  ::= <term> <ws> (<term> <ws>)*
/// <expressions> ::= <expression> ("|" <ws> <expression>)*
/// <production>  ::= <nonterminal> <ws> "::=" <ws> <expressions> ";"
/// <grammar>     ::= <production> <ws> (<production> <ws>)*
/// ```
///
/// Every decision is made by peeking at a single character. Repetitions are loops,
/// so the nesting depth is fixed no matter how large the input is.
pub struct Parser<'buf> {
    cursor: Cursor<'buf>,
}

impl<'buf> Parser<'buf> {
    pub fn new(cursor: Cursor<'buf>) -> Self {
        Self { cursor }
    }

    pub fn pos(&self) -> Position {
        self.cursor.pos()
    }

    /// Parses a whole grammar and requires the input to end afterwards.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn parse(mut self) -> Result<Grammar, ParseError> {
        let grammar = self.grammar()?;

        match self.cursor.peek() {
            None => Ok(grammar),
            Some(_) => Err(self.cursor.unexpected(Cow::Borrowed(GRAMMAR_CONTINUATION))),
        }
    }

    /// Skips whitespace, returning the consumed text.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn ws(&mut self) -> &'buf str {
        self.cursor.consume_while(is_whitespace)
    }

    /// Decodes an escape sequence inside a literal closed by `delimiter`.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn escaped(&mut self, delimiter: char) -> Result<char, ParseError> {
        let start = self.cursor.pos();
        self.cursor.expect('\\')?;

        match self.cursor.peek() {
            Some(c) => match unescape(c) {
                Some(decoded) => {
                    self.cursor.next();

                    Ok(decoded)
                }

                None => Err(ParseError::new(
                    ParseErrorKind::InvalidEscapeSequence(c),
                    start,
                )),
            },

            None => Err(self
                .cursor
                .error(ParseErrorKind::UnterminatedLiteral { delimiter })),
        }
    }

    /// Reads the text of a nonterminal.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn text(&mut self) -> Result<String, ParseError> {
        self.scan_text(is_text_char, '>')
    }

    /// Reads the text of a terminal, which may also contain `<` and `>`.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn terminal_text(&mut self) -> Result<String, ParseError> {
        self.scan_text(is_terminal_char, '"')
    }

    fn scan_text(
        &mut self,
        is_char: fn(char) -> bool,
        delimiter: char,
    ) -> Result<String, ParseError> {
        let mut value = String::new();

        loop {
            match self.cursor.peek() {
                Some('\\') => value.push(self.escaped(delimiter)?),

                Some(c) if is_char(c) => {
                    self.cursor.next();
                    value.push(c);
                }

                _ => return Ok(value),
            }
        }
    }

    fn close(&mut self, delimiter: char) -> Result<(), ParseError> {
        match self.cursor.peek() {
            None => Err(self
                .cursor
                .error(ParseErrorKind::UnterminatedLiteral { delimiter })),

            Some(_) => self.cursor.expect(delimiter).map(drop),
        }
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn terminal(&mut self) -> Result<Terminal, ParseError> {
        self.cursor.expect('"')?;
        let text = self.terminal_text()?;
        self.close('"')?;

        Ok(Terminal { text })
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn nonterminal(&mut self) -> Result<Nonterminal, ParseError> {
        self.cursor.expect('<')?;
        let text = self.text()?;
        self.close('>')?;

        Ok(Nonterminal { text })
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn term(&mut self) -> Result<Term, ParseError> {
        match self.cursor.peek() {
            Some('<') => self.nonterminal().map(Term::Nonterminal),
            Some('"') => self.terminal().map(Term::Terminal),
            _ => Err(self.cursor.unexpected(Cow::Borrowed(TERM_START))),
        }
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn expression(&mut self) -> Result<Expression, ParseError> {
        if let Some('|' | ';') = self.cursor.peek() {
            return Err(self.cursor.error(ParseErrorKind::EmptySequence));
        }

        let mut terms = vec![self.term()?];
        self.ws();

        while let Some('<' | '"') = self.cursor.peek() {
            terms.push(self.term()?);
            self.ws();
        }

        Ok(Expression { terms })
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn expressions(&mut self) -> Result<Vec<Expression>, ParseError> {
        if let Some(';') = self.cursor.peek() {
            return Err(self.cursor.error(ParseErrorKind::EmptyAlternation));
        }

        let mut expressions = vec![self.expression()?];

        while let Some('|') = self.cursor.peek() {
            self.cursor.next();
            self.ws();
            expressions.push(self.expression()?);
        }

        Ok(expressions)
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn production(&mut self) -> Result<Production, ParseError> {
        let lhs = self.nonterminal()?;
        self.ws();
        self.cursor.expect_str("::=")?;
        self.ws();
        let rhs = self.expressions()?;
        self.cursor.expect(';')?;

        Ok(Production { lhs, rhs })
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn grammar(&mut self) -> Result<Grammar, ParseError> {
        let mut productions = vec![self.production()?];
        self.ws();

        while let Some('<') = self.cursor.peek() {
            productions.push(self.production()?);
            self.ws();
        }

        Ok(Grammar { productions })
    }
}
