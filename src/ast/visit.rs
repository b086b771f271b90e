//! Read-only traversal of the AST.
//!
//! Implement [`DefaultVisitor`] and override the methods of interest; the remaining ones walk
//! the tree in textual order. Implement [`Visitor`] directly to compute a value per node.

use super::*;

pub trait AstRecurse {
    fn recurse<V: DefaultVisitor>(&self, visitor: &mut V);
}

macro_rules! define_visitor {
    ($( $type:ident { $( $name:ident ( $arg:ident : $ty:ty ) );+ $(;)? } )+) => {
        pub trait Visitor
        where
            Self: Sized,
        {
            type Output;

            $(
                $(
                    fn $name(&mut self, $arg: &$ty) -> Self::Output;
                )+
            )+
        }

        pub trait DefaultVisitor
        where
            Self: Sized,
        {
            $( define_visitor!(@ $type { $( $name ( $arg : &$ty ); )+ } ); )+
        }

        impl<T> Visitor for T
        where
            T: DefaultVisitor,
        {
            type Output = ();

            $(
                $(
                    fn $name(&mut self, $arg: &$ty) {
                        <Self as DefaultVisitor>::$name(self, $arg);
                    }
                )+
            )+
        }
    };

    (@ NonTerminal { $( $name:ident ( $arg:ident : $ty:ty ); )+ }) => {
        $(
            fn $name(&mut self, $arg: $ty) {
                $arg.recurse(self);
            }
        )+
    };

    (@ Terminal { $( $name:ident ( $arg:ident : $ty:ty ); )+ }) => {
        $(
            #[allow(unused_variables)]
            fn $name(&mut self, $arg: $ty) {}
        )+
    };
}

macro_rules! impl_recurse {
    (|$s:ident: $type:ty, $visitor:ident| $body:expr) => {
        impl AstRecurse for $type {
            fn recurse<V: DefaultVisitor>(&$s, $visitor: &mut V) {
                $body;
            }
        }
    };
}

define_visitor! {
    NonTerminal {
        visit_grammar(grammar: Grammar);
        visit_production(production: Production);
        visit_expression(expr: Expression);
        visit_term(term: Term);
    }

    Terminal {
        visit_terminal(terminal: Terminal);
        visit_nonterminal(nonterminal: Nonterminal);
    }
}

impl_recurse!(|self: Grammar, visitor| {
    for production in &self.productions {
        visitor.visit_production(production);
    }
});

impl_recurse!(|self: Production, visitor| {
    visitor.visit_nonterminal(&self.lhs);

    for expr in &self.rhs {
        visitor.visit_expression(expr);
    }
});

impl_recurse!(|self: Expression, visitor| {
    for term in &self.terms {
        visitor.visit_term(term);
    }
});

impl_recurse!(|self: Term, visitor| match self {
    Term::Terminal(terminal) => visitor.visit_terminal(terminal),
    Term::Nonterminal(nonterminal) => visitor.visit_nonterminal(nonterminal),
});
