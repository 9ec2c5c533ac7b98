//! Rule node types: RuleId, RuleData.

use std::ops::Range;

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a rule in a [`RuleTree`](super::RuleTree). Copy, lightweight (u64).
    pub struct RuleId;
}

/// Data associated with a single rule.
///
/// All offsets are byte offsets into the stylesheet source the tree was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleData {
    /// Byte offset (not char index) of the selector or at-rule prelude.
    pub start: usize,
    /// Byte offset of the opening `{`, or just past the `@import` keyword.
    pub body_start: usize,
    /// Byte offset of the closing `}`, or just past an `@import` statement.
    pub end: usize,
    /// 1-based line containing `start`. `None` until line numbers are resolved.
    pub line: Option<usize>,
    /// Normalized selector. `None` until preprocessed, and always `None` for the root.
    pub selector: Option<String>,
}

impl RuleData {
    /// Create a rule with raw offsets and no selector or line yet.
    pub fn new(start: usize, body_start: usize, end: usize) -> Self {
        Self {
            start,
            body_start,
            end,
            line: None,
            selector: None,
        }
    }

    /// The `[start, end)` range this rule occupies.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The raw prelude text (`start..body_start`) in `source`.
    ///
    /// Returns an empty string if the offsets do not fit `source`.
    pub fn prelude<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.body_start).unwrap_or("")
    }

    /// The text between the braces of a block rule.
    ///
    /// Leaf rules such as `@import` have no body and yield an empty string.
    pub fn body<'a>(&self, source: &'a str) -> &'a str {
        if self.is_import() {
            return "";
        }
        source.get(self.body_start + 1..self.end).unwrap_or("")
    }

    /// Whether the selector names an at-rule (`@media`, `@import`, ...).
    pub fn is_at_rule(&self) -> bool {
        self.selector.as_deref().is_some_and(|s| s.starts_with('@'))
    }

    /// Whether this rule is an `@import` statement leaf.
    pub fn is_import(&self) -> bool {
        self.selector.as_deref() == Some("@import")
    }

    /// Whether both the selector and the line number have been filled in.
    pub fn is_resolved(&self) -> bool {
        self.selector.is_some() && self.line.is_some()
    }
}
