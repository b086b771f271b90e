mod cursor;
mod error;
pub(crate) mod lexical;
mod parser;

pub use cursor::Cursor;
pub use error::{Expected, ParseError, ParseErrorKind};
pub use parser::Parser;

use crate::ast::Grammar;

/// Parses grammar text into its AST.
///
/// Fails on the first syntax error; no partial tree is ever returned.
pub fn parse(text: &str) -> Result<Grammar, ParseError> {
    Parser::new(Cursor::new(text)).parse()
}
