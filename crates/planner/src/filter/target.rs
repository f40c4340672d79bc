use model::criteria::Combinator;

use crate::query::ast::expr::{Composite, Expr};

/// A query under construction that can receive a compiled filter.
///
/// `attach_filter` is the only mutation the group compiler performs, and it
/// performs it at most once per top-level group.
pub trait FilterTarget {
    fn new_composite(&self, combinator: Combinator) -> Composite;

    fn new_and_composite(&self) -> Composite {
        self.new_composite(Combinator::And)
    }

    fn new_or_composite(&self) -> Composite {
        self.new_composite(Combinator::Or)
    }

    /// Merges `expr` into the existing filter using AND or OR semantics.
    fn attach_filter(&mut self, expr: Expr, combinator: Combinator);
}
