//! Turns declarative query criteria into a SQL `SELECT` statement.
//!
//! The [`filter`] module holds the criteria-to-expression compilation,
//! [`query`] the SQL AST, builder and renderer it targets.

pub mod deferred;
pub mod filter;
pub mod processor;
pub mod query;

pub use filter::{FilterError, GroupCompiler, PredicateTranslator, SqlPredicateTranslator, TranslateError};
pub use processor::DatabaseProcessor;
