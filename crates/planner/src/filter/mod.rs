//! Compilation of criteria filters into SQL boolean expressions.

pub mod error;
pub mod group;
pub mod target;
pub mod translator;

pub use error::{FilterError, TranslateError};
pub use group::GroupCompiler;
pub use target::FilterTarget;
pub use translator::{PredicateTranslator, SqlPredicateTranslator};
