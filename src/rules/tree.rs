//! Tree operations: insert, navigate, walk.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{RuleData, RuleId};

/// Empty slice constant for returning when a rule has no children.
const EMPTY_CHILDREN: &[RuleId] = &[];

/// A tree of parsed rules, backed by a slotmap arena.
///
/// The tree always has a synthetic root spanning `0..0` whose selector and line
/// stay unset. Parent/child relationships live in secondary maps, so the parent
/// link is a plain key and never an owning reference.
#[derive(Debug, Clone)]
pub struct RuleTree {
    pub(crate) nodes: SlotMap<RuleId, RuleData>,
    children: SecondaryMap<RuleId, Vec<RuleId>>,
    parent: SecondaryMap<RuleId, RuleId>,
    root: RuleId,
}

impl RuleTree {
    /// Create a tree holding only the synthetic root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(RuleData::default());
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            root,
        }
    }

    /// The synthetic root rule.
    pub fn root(&self) -> RuleId {
        self.root
    }

    /// Append a rule as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: RuleId, data: RuleData) -> RuleId {
        debug_assert!(self.nodes.contains_key(parent), "parent rule does not exist");
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Get the parent of a rule. The root has none.
    pub fn parent(&self, id: RuleId) -> Option<RuleId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a rule in document order. Returns an empty slice if
    /// the rule has no children or does not exist.
    pub fn children(&self, id: RuleId) -> &[RuleId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: RuleId) -> Vec<RuleId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Nesting depth of a rule. Top-level rules (and the root itself) are at depth 0.
    pub fn depth(&self, id: RuleId) -> usize {
        self.ancestors(id).len().saturating_sub(1)
    }

    /// Immutable access to a rule's data.
    pub fn get(&self, id: RuleId) -> Option<&RuleData> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: RuleId) -> Option<&mut RuleData> {
        self.nodes.get_mut(id)
    }

    /// Number of rules in the tree, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the tree holds no rules besides the root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pre-order depth-first traversal starting from `start`, i.e. document order.
    pub fn walk_depth_first(&self, start: RuleId) -> Vec<RuleId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Every rule in document order, root excluded.
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &RuleData)> + '_ {
        self.walk_depth_first(self.root)
            .into_iter()
            .skip(1)
            .filter_map(move |id| self.nodes.get(id).map(|data| (id, data)))
    }
}

impl Default for RuleTree {
    fn default() -> Self {
        Self::new()
    }
}
