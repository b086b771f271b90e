use serde::{Deserialize, Serialize};

use crate::parse::lexical::{escape, is_terminal_char, is_text_char};

use self::visit::{AstRecurse, DefaultVisitor};

pub mod visit;

/// A parsed grammar: its productions in textual order.
///
/// The same nonterminal may appear on the left-hand side of several productions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Grammar {
    pub productions: Vec<Production>,
}

impl Grammar {
    pub fn new(productions: Vec<Production>) -> Self {
        Self { productions }
    }

    /// Checks that the tree upholds the invariants a parsed tree always has:
    /// every production has an alternative, every alternative has a term,
    /// and the text of every symbol can be written back out.
    ///
    /// A grammar without productions passes this check even though it has no textual form
    /// that would parse.
    pub fn is_well_formed(&self) -> bool {
        let mut checker = WellFormednessChecker { well_formed: true };
        checker.visit_grammar(self);

        checker.well_formed
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Production {
    pub lhs: Nonterminal,

    /// The alternatives, separated by `|` in the source.
    pub rhs: Vec<Expression>,
}

impl Production {
    pub fn new(lhs: Nonterminal, rhs: Vec<Expression>) -> Self {
        Self { lhs, rhs }
    }
}

/// A single alternative: a sequence of terms.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Expression {
    pub terms: Vec<Term>,
}

impl Expression {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub enum Term {
    Terminal(Terminal),
    Nonterminal(Nonterminal),
}

impl From<Terminal> for Term {
    fn from(terminal: Terminal) -> Self {
        Self::Terminal(terminal)
    }
}

impl From<Nonterminal> for Term {
    fn from(nonterminal: Nonterminal) -> Self {
        Self::Nonterminal(nonterminal)
    }
}

/// A literal. `text` holds the decoded value, with escape sequences resolved.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Terminal {
    pub text: String,
}

impl Terminal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A named symbol, written `<text>`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Nonterminal {
    pub text: String,
}

impl Nonterminal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

struct WellFormednessChecker {
    well_formed: bool,
}

impl DefaultVisitor for WellFormednessChecker {
    fn visit_production(&mut self, production: &Production) {
        self.well_formed &= !production.rhs.is_empty();
        production.recurse(self);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.well_formed &= !expr.terms.is_empty();
        expr.recurse(self);
    }

    fn visit_terminal(&mut self, terminal: &Terminal) {
        self.well_formed &= terminal
            .text
            .chars()
            .all(|c| is_terminal_char(c) || escape(c).is_some());
    }

    fn visit_nonterminal(&mut self, nonterminal: &Nonterminal) {
        self.well_formed &= nonterminal
            .text
            .chars()
            .all(|c| is_text_char(c) || escape(c).is_some());
    }
}
