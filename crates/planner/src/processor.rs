//! Applies a [`Criteria`] document to a `SELECT` builder.

use model::{
    core::value::Value,
    criteria::{Combinator, Criteria, Criterion, Direction},
};
use tracing::{debug, info};

use crate::{
    deferred::Queue,
    filter::{
        error::{Result, TranslateError},
        group::GroupCompiler,
        target::FilterTarget,
        translator::PredicateTranslator,
    },
    query::{
        self,
        ast::{
            common::{OrderDir, TableRef},
            expr::Expr,
            select::Select,
        },
        builder::select::{FromState, SelectBuilder},
    },
};

pub struct DatabaseProcessor<T> {
    compiler: GroupCompiler<T>,
    deferred: Queue<Select>,
}

impl<T: PredicateTranslator> DatabaseProcessor<T> {
    pub fn new(translator: T) -> Self {
        Self {
            compiler: GroupCompiler::new(translator),
            deferred: Queue::new(),
        }
    }

    /// Registers a callback run with the finished statement after the next
    /// successful [`process`](Self::process).
    pub fn defer<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&Select) + 'static,
    {
        self.deferred.push(callback);
        self
    }

    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Builds the `SELECT` described by `criteria`.
    ///
    /// Criteria are applied in order. Deferred callbacks are only invoked
    /// when the whole document compiles; on error they stay queued.
    pub fn process(&mut self, criteria: &Criteria) -> Result<Select> {
        let mut builder = SelectBuilder::new()
            .select(projection(criteria)?)
            .from(table(&criteria.table), criteria.alias.as_deref());

        for criterion in &criteria.criteria {
            self.apply(&mut builder, criterion)?;
        }

        let select = builder.build();
        info!(
            "Compiled {} criterion(s) for table {}",
            criteria.criteria.len(),
            criteria.table
        );

        if !self.deferred.is_empty() {
            debug!("Running {} deferred callback(s)", self.deferred.len());
            self.deferred.invoke(&select);
        }

        Ok(select)
    }

    fn apply(&self, builder: &mut SelectBuilder<FromState>, criterion: &Criterion) -> Result<()> {
        match criterion {
            Criterion::Where(predicate) => {
                let term = self.compiler.translator().translate(predicate)?;
                builder.attach_filter(term, Combinator::And);
            }
            Criterion::Group(group) => {
                self.compiler.compile(builder, group)?;
            }
            Criterion::OrderBy(order) => {
                let direction = match order.direction {
                    Direction::Asc => OrderDir::Asc,
                    Direction::Desc => OrderDir::Desc,
                };
                builder.push_order_by(column(&order.field)?, Some(direction));
            }
            Criterion::Limit(limit) => builder.set_limit(Expr::Value(Value::Uint(*limit))),
            Criterion::Offset(offset) => builder.set_offset(Expr::Value(Value::Uint(*offset))),
            // Consumed up front by `projection`.
            Criterion::Select(_) => {}
        }
        Ok(())
    }
}

fn projection(criteria: &Criteria) -> Result<Vec<Expr>> {
    let columns = criteria
        .criteria
        .iter()
        .filter_map(|criterion| match criterion {
            Criterion::Select(fields) => Some(fields),
            _ => None,
        })
        .flatten()
        .map(String::as_str)
        .map(column)
        .collect::<Result<Vec<_>>>()?;

    if columns.is_empty() {
        Ok(vec![Expr::Wildcard])
    } else {
        Ok(columns)
    }
}

fn column(field: &str) -> Result<Expr> {
    Ok(query::column(field).ok_or(TranslateError::EmptyField)?)
}

fn table(name: &str) -> TableRef {
    match name.split_once('.') {
        Some((schema, name)) => TableRef {
            schema: Some(schema.to_string()),
            name: name.to_string(),
        },
        None => TableRef {
            schema: None,
            name: name.to_string(),
        },
    }
}
