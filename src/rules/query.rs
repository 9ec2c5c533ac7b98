//! Rule queries: by normalized selector, by top-level position.

use crate::css::selector::normalize_selector;

use super::node::RuleId;
use super::tree::RuleTree;

impl RuleTree {
    /// Find the direct children of `node` whose selector equals `selector` once
    /// normalized, in document order.
    ///
    /// Returns `None` when nothing matches, so callers can tell "no such rule"
    /// apart from a successful lookup. A returned vec is never empty. Nested rules
    /// (children of children) are not searched; see [`find_all_by_selector`].
    ///
    /// [`find_all_by_selector`]: RuleTree::find_all_by_selector
    pub fn find_by_selector(&self, node: RuleId, selector: &str) -> Option<Vec<RuleId>> {
        let selector = normalize_selector(selector);
        let found: Vec<RuleId> = self
            .children(node)
            .iter()
            .copied()
            .filter(|&id| self.selector_of(id) == Some(selector.as_str()))
            .collect();

        (!found.is_empty()).then_some(found)
    }

    /// Like [`find_by_selector`](RuleTree::find_by_selector), but searches the
    /// whole tree, including rules nested inside at-rules.
    pub fn find_all_by_selector(&self, selector: &str) -> Option<Vec<RuleId>> {
        let selector = normalize_selector(selector);
        let found: Vec<RuleId> = self
            .rules()
            .filter(|(_, data)| data.selector.as_deref() == Some(selector.as_str()))
            .map(|(id, _)| id)
            .collect();

        (!found.is_empty()).then_some(found)
    }

    /// The `index`-th top-level rule, counting `@import` leaves.
    pub fn rule_at(&self, index: usize) -> Option<RuleId> {
        self.children(self.root()).get(index).copied()
    }

    fn selector_of(&self, id: RuleId) -> Option<&str> {
        self.get(id).and_then(|data| data.selector.as_deref())
    }
}
