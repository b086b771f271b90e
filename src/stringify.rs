//! Rendering of the AST back into canonical grammar text.
//!
//! The output for a well-formed tree (see [`Grammar::is_well_formed`]) parses back into an equal
//! tree. Trees that are not well-formed are written out as they are: an empty alternative
//! renders as nothing and symbol text is emitted verbatim apart from escapes, so the result may
//! not parse.

use std::fmt::{self, Display, Write};

use itertools::Itertools;

use crate::ast::{Expression, Grammar, Nonterminal, Production, Term, Terminal};
use crate::parse::lexical::escape;

/// Writes `text`, replacing `"`, `\`, newlines, and tabs with their escape sequences.
pub fn write_escaped(text: &str, out: &mut impl Write) -> fmt::Result {
    for c in text.chars() {
        match escape(c) {
            Some(seq) => out.write_str(seq)?,
            None => out.write_char(c)?,
        }
    }

    Ok(())
}

/// Renders `grammar` in canonical form: one production per line, each followed by a newline.
///
/// A grammar without productions renders as the empty string.
pub fn stringify(grammar: &Grammar) -> String {
    grammar.to_string()
}

impl Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for production in &self.productions {
            writeln!(f, "{}", production)?;
        }

        Ok(())
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::= {};", self.lhs, self.rhs.iter().format(" | "))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms.iter().format(" "))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(terminal) => terminal.fmt(f),
            Self::Nonterminal(nonterminal) => nonterminal.fmt(f),
        }
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        write_escaped(&self.text, f)?;
        f.write_char('"')
    }
}

impl Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('<')?;
        write_escaped(&self.text, f)?;
        f.write_char('>')
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_terminal_escapes() {
        assert_eq!(
            Terminal::new("say \"hi\"\n\tback\\slash <ok>").to_string(),
            r#""say \"hi\"\n\tback\\slash <ok>""#
        );
        assert_eq!(Terminal::new("").to_string(), r#""""#);
    }

    #[test]
    fn test_nonterminal_escapes() {
        assert_eq!(Nonterminal::new("a b").to_string(), "<a b>");
        assert_eq!(Nonterminal::new("q\"\\").to_string(), r#"<q\"\\>"#);
    }

    #[test]
    fn test_hand_built_grammar() {
        let grammar = Grammar::new(vec![
            Production::new(
                Nonterminal::new("digit"),
                vec![
                    Expression::new(vec![Terminal::new("0").into()]),
                    Expression::new(vec![Terminal::new("1").into()]),
                ],
            ),
            Production::new(
                Nonterminal::new("number"),
                vec![
                    Expression::new(vec![
                        Nonterminal::new("digit").into(),
                        Nonterminal::new("number").into(),
                    ]),
                    Expression::new(vec![Nonterminal::new("digit").into()]),
                ],
            ),
        ]);

        assert_snapshot!(stringify(&grammar), @r###"
        <digit> ::= "0" | "1";
        <number> ::= <digit> <number> | <digit>;
        "###);
    }

    #[test]
    fn test_empty_grammar() {
        assert_eq!(stringify(&Grammar::default()), "");
    }

    #[test]
    fn test_canonicalizes_whitespace() {
        let grammar = parse("<a>\t::=\n  <b>\"c\"\n  |   \"d\\\\\"\n;   <b>::=\"\";").unwrap();

        assert_eq!(
            stringify(&grammar),
            "<a> ::= <b> \"c\" | \"d\\\\\";\n<b> ::= \"\";\n"
        );
    }

    #[test]
    fn test_ill_formed_trees_are_not_fixed() {
        let grammar = Grammar::new(vec![Production::new(
            Nonterminal::new("a"),
            vec![Expression::new(vec![])],
        )]);

        assert_eq!(stringify(&grammar), "<a> ::= ;\n");
        assert!(parse(&stringify(&grammar)).is_err());
    }
}
