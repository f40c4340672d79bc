//! Defines the AST for SQL expressions.

use model::{core::value::Value, criteria::Combinator};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A literal value, bound as a query parameter.
    Value(Value),

    /// The `*` projection.
    Wildcard,

    /// A binary comparison, e.g., `column = 'value'`.
    BinaryOp(Box<BinaryOp>),

    /// `expr [NOT] LIKE pattern`
    Like {
        expr: Box<Expr>,
        pattern: Box<Expr>,
        negated: bool,
    },

    /// `expr [NOT] IN (a, b, ...)`
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },

    /// `expr IS [NOT] NULL`
    IsNull { expr: Box<Expr>, negated: bool },

    /// An AND/OR combination of sub-expressions.
    Composite(Composite),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
}

/// An ordered list of terms joined by a single boolean combinator.
///
/// Adding an empty composite is a no-op, so empty groups never show up as
/// `()` in the rendered SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    combinator: Combinator,
    parts: Vec<Expr>,
}

impl Composite {
    pub fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            parts: Vec::new(),
        }
    }

    pub fn and() -> Self {
        Self::new(Combinator::And)
    }

    pub fn or() -> Self {
        Self::new(Combinator::Or)
    }

    pub fn with_parts(combinator: Combinator, parts: impl IntoIterator<Item = Expr>) -> Self {
        let mut composite = Self::new(combinator);
        for part in parts {
            composite.add(part);
        }
        composite
    }

    /// Appends a term, skipping empty composites.
    pub fn add(&mut self, term: Expr) -> &mut Self {
        if let Expr::Composite(inner) = &term
            && inner.is_empty()
        {
            return self;
        }
        self.parts.push(term);
        self
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn parts(&self) -> &[Expr] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Expr> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Composite> for Expr {
    fn from(composite: Composite) -> Self {
        Expr::Composite(composite)
    }
}

impl Expr {
    pub fn is_empty_composite(&self) -> bool {
        matches!(self, Expr::Composite(c) if c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident;

    #[test]
    fn test_add_keeps_order() {
        let mut composite = Composite::and();
        composite.add(ident!("a")).add(ident!("b")).add(ident!("c"));
        assert_eq!(composite.parts(), &[ident!("a"), ident!("b"), ident!("c")]);
    }

    #[test]
    fn test_add_skips_empty_composite() {
        let mut composite = Composite::or();
        composite.add(Expr::Composite(Composite::and()));
        assert!(composite.is_empty());

        let mut inner = Composite::and();
        inner.add(ident!("x"));
        composite.add(inner.into());
        assert_eq!(composite.len(), 1);
    }

    #[test]
    fn test_into_parts_keeps_order() {
        let composite = Composite::with_parts(Combinator::Or, [ident!("a"), ident!("b")]);
        assert_eq!(composite.into_parts(), vec![ident!("a"), ident!("b")]);
    }
}
