//! Rule arena: slotmap-backed tree of parsed rules with selector queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{RuleData, RuleId};
pub use tree::RuleTree;
