use model::criteria::Combinator;

use crate::query::{
    ast::expr::{BinaryOp, BinaryOperator, Composite, Expr, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::Wildcard => r.sql.push('*'),
            Expr::BinaryOp(op) => op.render(r),
            Expr::Like {
                expr,
                pattern,
                negated,
            } => {
                expr.render(r);
                r.sql.push_str(if *negated { " NOT LIKE " } else { " LIKE " });
                pattern.render(r);
            }
            Expr::InList {
                expr,
                list,
                negated,
            } => {
                expr.render(r);
                r.sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    item.render(r);
                }
                r.sql.push(')');
            }
            Expr::Between {
                expr,
                low,
                high,
                negated,
            } => {
                expr.render(r);
                r.sql
                    .push_str(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                low.render(r);
                r.sql.push_str(" AND ");
                high.render(r);
            }
            Expr::IsNull { expr, negated } => {
                expr.render(r);
                r.sql
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Expr::Composite(composite) => composite.render(r),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
    }
}

impl Render for Composite {
    fn render(&self, r: &mut Renderer) {
        match self.parts() {
            // Neutral element of the combinator.
            [] => r.sql.push_str(match self.combinator() {
                Combinator::And => "TRUE",
                Combinator::Or => "FALSE",
            }),
            [single] => single.render(r),
            parts => {
                let sep = match self.combinator() {
                    Combinator::And => " AND ",
                    Combinator::Or => " OR ",
                };
                r.sql.push('(');
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(sep);
                    }
                    part.render(r);
                }
                r.sql.push(')');
            }
        }
    }
}
