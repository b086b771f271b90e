//! Parsing and canonical printing of a BNF-like grammar notation.
//!
//! ```text
//! <list> ::= "<" <items> ">";
//! <items> ::= <items> " " <item> | <item>;
//! <item> ::= "foo" | "bar" | "baz";
//! ```
//!
//! [`parse`] turns such text into a [`Grammar`]; [`stringify`] renders a grammar back in
//! canonical form, which always parses into an equal tree.

pub mod ast;
pub mod parse;
pub mod position;
pub mod stringify;

pub use ast::{Expression, Grammar, Nonterminal, Production, Term, Terminal};
pub use parse::{parse, ParseError, ParseErrorKind};
pub use stringify::stringify;
