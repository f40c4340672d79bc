use crate::query::ast::expr::{Expr, Ident};

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod macros;
pub mod renderer;

/// Parses a possibly qualified column reference (`"u.email"`).
///
/// Returns `None` when either part is empty.
pub fn column(field: &str) -> Option<Expr> {
    let (qualifier, name) = match field.rsplit_once('.') {
        Some((qualifier, name)) => (Some(qualifier), name),
        None => (None, field),
    };
    if name.is_empty() || qualifier.is_some_and(str::is_empty) {
        return None;
    }
    Some(Expr::Identifier(Ident {
        qualifier: qualifier.map(String::from),
        name: name.to_string(),
    }))
}
