//! Provides a type-safe, fluent builder for constructing `Select` ASTs.

// --- Typestate Marker Structs ---
// These zero-sized structs represent the state of the builder.
// They ensure that methods are called in the correct SQL order at compile time.

use crate::{
    filter::target::FilterTarget,
    query::ast::{
        common::{OrderDir, TableRef},
        expr::{Composite, Expr},
        select::{FromClause, OrderByExpr, Select},
    },
};
use model::criteria::Combinator;

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the `SELECT` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the `FROM` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct FromState;

// --- The Main Builder ---

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    state: State,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

/// Implementation for the initial state of the builder.
impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            state: InitialState,
        }
    }

    /// Adds a `SELECT` clause with a list of columns.
    /// This is the entry point for building a select query.
    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        SelectBuilder {
            ast: self.ast,
            state: SelectState,
        }
    }
}

/// Implementation for the state after `SELECT` has been called.
/// The only valid next step is to specify a `FROM` table.
impl SelectBuilder<SelectState> {
    /// Adds a `FROM` clause specifying the primary table.
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(String::from),
        });
        SelectBuilder {
            ast: self.ast,
            state: FromState,
        }
    }
}

/// Implementation for the state after `FROM` has been called.
/// From here, we can add optional clauses like `WHERE`, `ORDER BY`, etc.
impl SelectBuilder<FromState> {
    /// Replaces the `WHERE` clause of the query.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    /// AND-merges `condition` into the existing `WHERE` clause.
    pub fn and_where(mut self, condition: Expr) -> Self {
        self.attach_filter(condition, Combinator::And);
        self
    }

    /// OR-merges `condition` into the existing `WHERE` clause.
    pub fn or_where(mut self, condition: Expr) -> Self {
        self.attach_filter(condition, Combinator::Or);
        self
    }

    /// Returns the current `WHERE` clause, if any.
    pub fn filter(&self) -> Option<&Expr> {
        self.ast.where_clause.as_ref()
    }

    /// Adds an `ORDER BY` clause to the query.
    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.push_order_by(expr, direction);
        self
    }

    /// Adds a `LIMIT` clause to the query.
    pub fn limit(mut self, limit: Expr) -> Self {
        self.set_limit(limit);
        self
    }

    /// Adds an `OFFSET` clause to the query.
    pub fn offset(mut self, offset: Expr) -> Self {
        self.set_offset(offset);
        self
    }

    pub(crate) fn push_order_by(&mut self, expr: Expr, direction: Option<OrderDir>) {
        self.ast.order_by.push(OrderByExpr { expr, direction });
    }

    pub(crate) fn set_limit(&mut self, limit: Expr) {
        self.ast.limit = Some(limit);
    }

    pub(crate) fn set_offset(&mut self, offset: Expr) {
        self.ast.offset = Some(offset);
    }

    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }
}

impl FilterTarget for SelectBuilder<FromState> {
    fn new_composite(&self, combinator: Combinator) -> Composite {
        Composite::new(combinator)
    }

    fn attach_filter(&mut self, expr: Expr, combinator: Combinator) {
        if expr.is_empty_composite() {
            return;
        }

        self.ast.where_clause = Some(match self.ast.where_clause.take() {
            None => expr,
            Some(Expr::Composite(mut existing)) if existing.combinator() == combinator => {
                existing.add(expr);
                Expr::Composite(existing)
            }
            Some(existing) => Expr::Composite(Composite::with_parts(combinator, [existing, expr])),
        });
    }
}
