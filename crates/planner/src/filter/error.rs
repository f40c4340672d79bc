use model::criteria::{CriterionKind, Operator};
use thiserror::Error;

/// Errors raised while turning a single predicate into an expression.
#[derive(Debug, Error, PartialEq)]
pub enum TranslateError {
    #[error("Predicate field name must not be empty")]
    EmptyField,

    #[error("Invalid value for `{field} {operator}`: expected {expected}, got {actual}")]
    InvalidValue {
        field: String,
        operator: Operator,
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    /// A group held a criterion that cannot be nested in a filter.
    #[error("Unsupported criterion inside a group: {kind}")]
    UnsupportedCriterion { kind: CriterionKind },

    /// Passed through from the predicate translator.
    #[error(transparent)]
    Translate(#[from] TranslateError),
}

pub type Result<T> = std::result::Result<T, FilterError>;
