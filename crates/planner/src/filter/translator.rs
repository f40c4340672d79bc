//! Translation of a single [`Predicate`] into a SQL expression term.

use model::{
    core::value::Value,
    criteria::{Operator, Predicate},
};
use tracing::trace;

use crate::{
    filter::error::TranslateError,
    query::{
        self,
        ast::expr::{BinaryOp, BinaryOperator, Expr},
    },
};

/// Turns one leaf predicate into one expression term.
pub trait PredicateTranslator {
    fn translate(&self, predicate: &Predicate) -> Result<Expr, TranslateError>;
}

impl<T: PredicateTranslator + ?Sized> PredicateTranslator for &T {
    fn translate(&self, predicate: &Predicate) -> Result<Expr, TranslateError> {
        (**self).translate(predicate)
    }
}

/// Default translator producing plain SQL comparison terms.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlPredicateTranslator;

impl PredicateTranslator for SqlPredicateTranslator {
    fn translate(&self, predicate: &Predicate) -> Result<Expr, TranslateError> {
        let column = column(predicate)?;
        let value = &predicate.value;

        trace!(
            "Translating predicate `{} {}` with {} value",
            predicate.field,
            predicate.operator,
            value.type_name()
        );

        let expr = match predicate.operator {
            // `= NULL` never matches in SQL.
            Operator::Eq if value.is_null() => is_null(column, false),
            Operator::NotEq if value.is_null() => is_null(column, true),

            Operator::Eq => binary(column, BinaryOperator::Eq, value),
            Operator::NotEq => binary(column, BinaryOperator::NotEq, value),
            Operator::Lt => binary(column, BinaryOperator::Lt, value),
            Operator::LtEq => binary(column, BinaryOperator::LtEq, value),
            Operator::Gt => binary(column, BinaryOperator::Gt, value),
            Operator::GtEq => binary(column, BinaryOperator::GtEq, value),

            Operator::Like | Operator::NotLike => {
                if value.as_str().is_none() {
                    return Err(invalid(predicate, "a string pattern"));
                }
                Expr::Like {
                    expr: Box::new(column),
                    pattern: Box::new(Expr::Value(value.clone())),
                    negated: predicate.operator == Operator::NotLike,
                }
            }

            Operator::In | Operator::NotIn => {
                let items = value
                    .as_list()
                    .filter(|items| !items.is_empty())
                    .ok_or_else(|| invalid(predicate, "a non-empty list"))?;
                Expr::InList {
                    expr: Box::new(column),
                    list: items.into_iter().map(Expr::Value).collect(),
                    negated: predicate.operator == Operator::NotIn,
                }
            }

            Operator::Between | Operator::NotBetween => {
                let (low, high) = match value.as_list().as_deref() {
                    Some([low, high]) => (low.clone(), high.clone()),
                    _ => return Err(invalid(predicate, "a list of two bounds")),
                };
                Expr::Between {
                    expr: Box::new(column),
                    low: Box::new(Expr::Value(low)),
                    high: Box::new(Expr::Value(high)),
                    negated: predicate.operator == Operator::NotBetween,
                }
            }

            Operator::IsNull => is_null(column, false),
            Operator::IsNotNull => is_null(column, true),
        };

        Ok(expr)
    }
}

fn column(predicate: &Predicate) -> Result<Expr, TranslateError> {
    query::column(&predicate.field).ok_or(TranslateError::EmptyField)
}

fn binary(left: Expr, op: BinaryOperator, value: &Value) -> Expr {
    Expr::BinaryOp(Box::new(BinaryOp {
        left,
        op,
        right: Expr::Value(value.clone()),
    }))
}

fn is_null(expr: Expr, negated: bool) -> Expr {
    Expr::IsNull {
        expr: Box::new(expr),
        negated,
    }
}

fn invalid(predicate: &Predicate, expected: &'static str) -> TranslateError {
    TranslateError::InvalidValue {
        field: predicate.field.clone(),
        operator: predicate.operator,
        expected,
        actual: predicate.value.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident;
    use serde_json::json;

    fn translate(field: &str, op: Operator, value: Value) -> Result<Expr, TranslateError> {
        SqlPredicateTranslator.translate(&Predicate::new(field, op, value))
    }

    #[test]
    fn test_comparison() {
        let expr = translate("u.age", Operator::GtEq, Value::Int(18)).unwrap();
        assert_eq!(
            expr,
            Expr::BinaryOp(Box::new(BinaryOp {
                left: ident!("u", "age"),
                op: BinaryOperator::GtEq,
                right: Expr::Value(Value::Int(18)),
            }))
        );
    }

    #[test]
    fn test_eq_null_becomes_is_null() {
        assert_eq!(
            translate("deleted_at", Operator::Eq, Value::Null).unwrap(),
            Expr::IsNull {
                expr: Box::new(ident!("deleted_at")),
                negated: false,
            }
        );
        assert_eq!(
            translate("deleted_at", Operator::NotEq, Value::Null).unwrap(),
            Expr::IsNull {
                expr: Box::new(ident!("deleted_at")),
                negated: true,
            }
        );
    }

    #[test]
    fn test_in_accepts_string_and_json_arrays() {
        let strings = translate(
            "role",
            Operator::In,
            Value::StringArray(vec!["admin".into(), "owner".into()]),
        )
        .unwrap();
        assert!(matches!(strings, Expr::InList { ref list, negated: false, .. } if list.len() == 2));

        let numbers = translate("id", Operator::NotIn, Value::Json(json!([1, 2, 3]))).unwrap();
        assert!(matches!(numbers, Expr::InList { ref list, negated: true, .. } if list.len() == 3));
    }

    #[test]
    fn test_in_rejects_empty_and_scalar() {
        let err = translate("id", Operator::In, Value::StringArray(vec![])).unwrap_err();
        assert_eq!(
            err,
            TranslateError::InvalidValue {
                field: "id".into(),
                operator: Operator::In,
                expected: "a non-empty list",
                actual: "string_array",
            }
        );
        assert!(translate("id", Operator::In, Value::Int(1)).is_err());
    }

    #[test]
    fn test_between_requires_two_bounds() {
        let ok = translate("age", Operator::Between, Value::Json(json!([18, 65]))).unwrap();
        assert_eq!(
            ok,
            Expr::Between {
                expr: Box::new(ident!("age")),
                low: Box::new(Expr::Value(Value::Int(18))),
                high: Box::new(Expr::Value(Value::Int(65))),
                negated: false,
            }
        );
        assert!(translate("age", Operator::Between, Value::Json(json!([1, 2, 3]))).is_err());
    }

    #[test]
    fn test_like_requires_string() {
        assert!(translate("name", Operator::Like, Value::from("Jo%")).is_ok());
        let err = translate("name", Operator::NotLike, Value::Int(3)).unwrap_err();
        assert!(err.to_string().contains("expected a string pattern, got int"));
    }

    #[test]
    fn test_empty_field_rejected() {
        assert_eq!(
            translate("", Operator::Eq, Value::Int(1)).unwrap_err(),
            TranslateError::EmptyField
        );
        assert_eq!(
            translate(".id", Operator::Eq, Value::Int(1)).unwrap_err(),
            TranslateError::EmptyField
        );
    }
}
