//! End-to-end tests of group compilation against a real `SelectBuilder`.

use model::{
    core::value::Value,
    criteria::{Combinator, Criterion, CriterionKind, Group, Operator, Predicate},
};
use planner::{
    FilterError, GroupCompiler, PredicateTranslator, SqlPredicateTranslator,
    filter::FilterTarget,
    ident,
    query::{
        ast::expr::Expr,
        builder::select::{FromState, SelectBuilder},
        dialect::{MySql, Postgres},
        renderer::render,
    },
    table_ref,
};
use tracing_test::traced_test;

fn users() -> SelectBuilder<FromState> {
    SelectBuilder::new()
        .select(vec![Expr::Wildcard])
        .from(table_ref!("users"), None)
}

fn eq(field: &str, v: impl Into<Value>) -> Criterion {
    Criterion::where_(field, Operator::Eq, v)
}

#[test]
fn test_nested_groups_render_with_their_own_combinators() {
    let compiler = GroupCompiler::new(SqlPredicateTranslator);
    let mut query = users();

    // a AND (b OR c)
    let right = Group::and(vec![
        eq("a", 1),
        Group::or(vec![eq("b", 2), eq("c", 3)]).into(),
    ]);
    compiler.compile(&mut query, &right).unwrap();
    let (sql, params) = render(&query.build(), &Postgres);
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE ("a" = $1 AND ("b" = $2 OR "c" = $3))"#
    );
    assert_eq!(params, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    // (a AND b) OR c
    let mut query = users();
    let left = Group::or(vec![
        Group::and(vec![eq("a", 1), eq("b", 2)]).into(),
        eq("c", 3),
    ]);
    compiler.compile(&mut query, &left).unwrap();
    let (sql, _) = render(&query.build(), &MySql);
    assert_eq!(sql, "SELECT * FROM `users` WHERE ((`a` = ? AND `b` = ?) OR `c` = ?)");
}

#[test]
fn test_group_merges_into_existing_filter() {
    let compiler = GroupCompiler::new(SqlPredicateTranslator);
    let tenant = SqlPredicateTranslator
        .translate(&Predicate::new("tenant", Operator::Eq, 7))
        .unwrap();
    let mut query = users().and_where(tenant);

    compiler
        .compile(&mut query, &Group::and(vec![eq("a", 1), eq("b", 2)]))
        .unwrap();

    let (sql, _) = render(&query.build(), &Postgres);
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE ("tenant" = $1 AND ("a" = $2 AND "b" = $3))"#
    );
}

#[test]
fn test_failed_compilation_leaves_filter_untouched() {
    let compiler = GroupCompiler::new(SqlPredicateTranslator);
    let mut query = users().and_where(ident!("flag"));
    let before = query.filter().cloned();

    let err = compiler
        .compile(
            &mut query,
            &Group::or(vec![eq("a", 1), Criterion::Select(vec!["id".into()])]),
        )
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::UnsupportedCriterion {
            kind: CriterionKind::Select
        }
    );
    assert_eq!(query.filter().cloned(), before);

    let err = compiler
        .compile(
            &mut query,
            &Group::and(vec![Criterion::where_("id", Operator::In, Value::Int(3))]),
        )
        .unwrap_err();
    assert!(matches!(err, FilterError::Translate(_)));
    assert_eq!(query.filter().cloned(), before);
}

#[test]
fn test_empty_group_has_no_effect() {
    let compiler = GroupCompiler::new(SqlPredicateTranslator);
    let mut query = users();

    let parts = compiler.compile(&mut query, &Group::or(vec![])).unwrap();
    assert!(parts.is_empty());
    assert!(query.filter().is_none());

    let parts = compiler
        .compile(
            &mut query,
            &Group::and(vec![Group::or(vec![]).into(), eq("a", 1)]),
        )
        .unwrap();
    assert_eq!(parts.len(), 1);
    let (sql, _) = render(&query.build(), &Postgres);
    assert_eq!(sql, r#"SELECT * FROM "users" WHERE "a" = $1"#);
}

#[test]
fn test_compiler_is_reusable_across_queries() {
    let compiler = GroupCompiler::new(SqlPredicateTranslator);
    let tree = Group::or(vec![
        eq("a", 1),
        Group::and(vec![eq("b", 2), eq("c", 3)]).into(),
    ]);

    let mut first = users();
    let mut second = users();
    compiler.compile(&mut first, &tree).unwrap();
    compiler.compile(&mut second, &tree).unwrap();

    assert_eq!(first.build(), second.build());
}

#[test]
fn test_query_composite_factories() {
    let query = users();
    assert_eq!(query.new_and_composite().combinator(), Combinator::And);
    assert_eq!(query.new_or_composite().combinator(), Combinator::Or);
}

#[test]
#[traced_test]
fn test_attachment_and_rejection_are_logged() {
    let compiler = GroupCompiler::new(SqlPredicateTranslator);

    let mut query = users();
    compiler
        .compile(&mut query, &Group::and(vec![eq("a", 1), eq("b", 2)]))
        .unwrap();
    assert!(logs_contain("Attaching AND filter group with 2 term(s)"));

    let mut query = users();
    let _ = compiler.compile(&mut query, &Group::or(vec![Criterion::Limit(1)]));
    assert!(logs_contain("Rejecting limit criterion nested in a filter group"));
}
