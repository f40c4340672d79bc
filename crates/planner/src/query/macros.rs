#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::query::ast::common::TableRef {
            schema: None,
            name: $name.to_string(),
        }
    };
    ($schema:expr, $name:expr) => {
        $crate::query::ast::common::TableRef {
            schema: Some($schema.to_string()),
            name: $name.to_string(),
        }
    };
}

#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        $crate::query::ast::expr::Expr::Identifier($crate::query::ast::expr::Ident {
            qualifier: None,
            name: $name.to_string(),
        })
    };
    ($qualifier:expr, $name:expr) => {
        $crate::query::ast::expr::Expr::Identifier($crate::query::ast::expr::Ident {
            qualifier: Some($qualifier.to_string()),
            name: $name.to_string(),
        })
    };
}

/// Builds a composite expression from a combinator keyword and its parts:
/// `composite!(and; a, b)` or `composite!(or; a, b, c)`.
#[macro_export]
macro_rules! composite {
    (and; $($part:expr),* $(,)?) => {
        $crate::query::ast::expr::Expr::Composite(
            $crate::query::ast::expr::Composite::with_parts(
                ::model::criteria::Combinator::And,
                [$($part),*],
            ),
        )
    };
    (or; $($part:expr),* $(,)?) => {
        $crate::query::ast::expr::Expr::Composite(
            $crate::query::ast::expr::Composite::with_parts(
                ::model::criteria::Combinator::Or,
                [$($part),*],
            ),
        )
    };
}
