//! Compilation of nested AND/OR criteria groups.
//!
//! A [`Group`] is compiled into a [`Composite`] that mirrors its shape: each
//! child predicate becomes one term, each child group becomes one nested
//! composite carrying that child's own combinator. Only the outermost group
//! of a compilation attaches its composite to the query.

use std::cell::Cell;

use model::criteria::{Criterion, Group};
use tracing::{debug, trace, warn};

use crate::{
    filter::{
        error::{FilterError, Result},
        target::FilterTarget,
        translator::PredicateTranslator,
    },
    query::ast::expr::{Composite, Expr},
};

/// Recursion depth of a single compilation.
///
/// Every [`GroupCompiler::compile`] call owns a fresh context, so one
/// compiler can be reused (or called reentrantly) without the depth of one
/// tree leaking into another.
#[derive(Debug, Default)]
pub(crate) struct CompilationContext {
    depth: Cell<usize>,
}

impl CompilationContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }

    pub(crate) fn is_top_level(&self) -> bool {
        self.depth.get() == 0
    }

    fn enter(&self) -> DepthGuard<'_> {
        self.depth.set(self.depth.get() + 1);
        DepthGuard { depth: &self.depth }
    }
}

/// Decrements the depth when dropped, on success and error paths alike.
struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

struct Compiled {
    composite: Composite,
    top_level: bool,
}

pub struct GroupCompiler<T> {
    translator: T,
}

impl<T: PredicateTranslator> GroupCompiler<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Compiles `group` and attaches the result to `query`'s filter.
    ///
    /// The composite is AND-merged or OR-merged according to the group's
    /// combinator. Returns the composite's immediate terms in child order.
    /// On error the query is left untouched.
    pub fn compile<Q>(&self, query: &mut Q, group: &Group) -> Result<Vec<Expr>>
    where
        Q: FilterTarget + ?Sized,
    {
        let ctx = CompilationContext::new();
        self.compile_in(&ctx, query, group)
    }

    fn compile_in<Q>(&self, ctx: &CompilationContext, query: &mut Q, group: &Group) -> Result<Vec<Expr>>
    where
        Q: FilterTarget + ?Sized,
    {
        let Compiled {
            composite,
            top_level,
        } = self.compile_group(ctx, &*query, group)?;

        if !top_level {
            return Ok(composite.into_parts());
        }

        debug!(
            "Attaching {} filter group with {} term(s)",
            group.combinator,
            composite.len()
        );
        let parts = composite.parts().to_vec();
        query.attach_filter(Expr::Composite(composite), group.combinator);

        Ok(parts)
    }

    fn compile_group<Q>(&self, ctx: &CompilationContext, query: &Q, group: &Group) -> Result<Compiled>
    where
        Q: FilterTarget + ?Sized,
    {
        let composite = {
            let _guard = ctx.enter();
            trace!(
                "Compiling {} group with {} child(ren) at depth {}",
                group.combinator,
                group.children.len(),
                ctx.depth()
            );

            let mut composite = query.new_composite(group.combinator);
            for term in self.terms(ctx, query, group) {
                composite.add(term?);
            }
            composite
        };

        Ok(Compiled {
            composite,
            top_level: ctx.is_top_level(),
        })
    }

    /// Lazily yields one term per child, in order.
    fn terms<'a, Q>(
        &'a self,
        ctx: &'a CompilationContext,
        query: &'a Q,
        group: &'a Group,
    ) -> impl Iterator<Item = Result<Expr>> + 'a
    where
        Q: FilterTarget + ?Sized,
    {
        group
            .children
            .iter()
            .map(move |child| self.compile_child(ctx, query, child))
    }

    fn compile_child<Q>(&self, ctx: &CompilationContext, query: &Q, child: &Criterion) -> Result<Expr>
    where
        Q: FilterTarget + ?Sized,
    {
        match child {
            Criterion::Where(predicate) => Ok(self.translator.translate(predicate)?),
            Criterion::Group(group) => {
                let nested = self.compile_group(ctx, query, group)?;
                Ok(Expr::Composite(nested.composite))
            }
            other => {
                warn!("Rejecting {} criterion nested in a filter group", other.kind());
                Err(FilterError::UnsupportedCriterion { kind: other.kind() })
            }
        }
    }
}
