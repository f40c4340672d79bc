use crate::criteria::Criterion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The boolean operator joining a group's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    And,
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => f.write_str("AND"),
            Combinator::Or => f.write_str("OR"),
        }
    }
}

/// An ordered set of filters combined with one [`Combinator`].
///
/// Children may only be `Criterion::Where` or `Criterion::Group`. The type
/// does not prevent other kinds from being pushed, since trees are often
/// assembled at runtime (or deserialized); the compiler rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub combinator: Combinator,
    #[serde(default)]
    pub children: Vec<Criterion>,
}

impl Group {
    pub fn new(combinator: Combinator, children: Vec<Criterion>) -> Self {
        Self {
            combinator,
            children,
        }
    }

    pub fn and(children: Vec<Criterion>) -> Self {
        Self::new(Combinator::And, children)
    }

    pub fn or(children: Vec<Criterion>) -> Self {
        Self::new(Combinator::Or, children)
    }
}
