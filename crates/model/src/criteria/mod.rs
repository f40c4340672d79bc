//! Declarative query criteria.
//!
//! A query is described as an ordered list of [`Criterion`] values. Filters
//! are either a single [`Predicate`] or a [`Group`] combining further
//! filters with AND/OR; the remaining variants shape the rest of the query
//! and are only meaningful at the top level.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod group;
pub mod predicate;

pub use group::{Combinator, Group};
pub use predicate::{Operator, Predicate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// A single field comparison, e.g. `age > 18`.
    Where(Predicate),

    /// A nested AND/OR group of filters.
    Group(Group),

    /// An `ORDER BY` entry.
    OrderBy(OrderBy),

    /// Maximum number of rows.
    Limit(u64),

    /// Number of rows to skip.
    Offset(u64),

    /// Projected columns. Several `Select` criteria accumulate.
    Select(Vec<String>),
}

/// The kind of a [`Criterion`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Where,
    Group,
    OrderBy,
    Limit,
    Offset,
    Select,
}

impl Criterion {
    pub fn kind(&self) -> CriterionKind {
        match self {
            Criterion::Where(_) => CriterionKind::Where,
            Criterion::Group(_) => CriterionKind::Group,
            Criterion::OrderBy(_) => CriterionKind::OrderBy,
            Criterion::Limit(_) => CriterionKind::Limit,
            Criterion::Offset(_) => CriterionKind::Offset,
            Criterion::Select(_) => CriterionKind::Select,
        }
    }

    pub fn where_(field: &str, operator: Operator, value: impl Into<crate::core::value::Value>) -> Self {
        Criterion::Where(Predicate::new(field, operator, value))
    }
}

impl From<Predicate> for Criterion {
    fn from(predicate: Predicate) -> Self {
        Criterion::Where(predicate)
    }
}

impl From<Group> for Criterion {
    fn from(group: Group) -> Self {
        Criterion::Group(group)
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CriterionKind::Where => "where",
            CriterionKind::Group => "group",
            CriterionKind::OrderBy => "order_by",
            CriterionKind::Limit => "limit",
            CriterionKind::Offset => "offset",
            CriterionKind::Select => "select",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    #[serde(default)]
    pub direction: Direction,
}

/// A complete query description: the target table plus its criteria in
/// application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub table: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
}

impl Criteria {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            alias: None,
            criteria: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    pub fn with(mut self, criterion: impl Into<Criterion>) -> Self {
        self.criteria.push(criterion.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;
    use serde_json::json;

    #[test]
    fn test_deserialize_criteria_document() {
        let doc = json!({
            "table": "users",
            "alias": "u",
            "criteria": [
                { "where": { "field": "u.active", "operator": "eq", "value": { "Boolean": true } } },
                { "group": {
                    "combinator": "or",
                    "children": [
                        { "where": { "field": "age", "operator": "gt", "value": { "Int": 18 } } },
                        { "where": { "field": "role", "operator": "eq", "value": { "String": "admin" } } }
                    ]
                } },
                { "order_by": { "field": "id", "direction": "desc" } },
                { "limit": 10 }
            ]
        });

        let criteria: Criteria = serde_json::from_value(doc).unwrap();
        assert_eq!(criteria.table, "users");
        assert_eq!(criteria.alias.as_deref(), Some("u"));
        assert_eq!(criteria.criteria.len(), 4);

        let Criterion::Group(group) = &criteria.criteria[1] else {
            panic!("expected a group, got {:?}", criteria.criteria[1]);
        };
        assert_eq!(group.combinator, Combinator::Or);
        assert_eq!(
            group.children[1],
            Criterion::where_("role", Operator::Eq, Value::String("admin".into()))
        );
        assert_eq!(criteria.criteria[3], Criterion::Limit(10));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Criterion::Limit(1).kind().to_string(), "limit");
        assert_eq!(
            Criterion::OrderBy(OrderBy {
                field: "id".into(),
                direction: Direction::Asc,
            })
            .kind()
            .to_string(),
            "order_by"
        );
    }
}
