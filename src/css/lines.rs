//! Line index and line number resolution.
//!
//! The index is built once per stylesheet and shared by every lookup, so
//! resolving lines for the whole tree never rescans the text.

use crate::rules::{RuleId, RuleTree};

/// Byte offsets of the first character of every line.
///
/// Entry `k` is where line `k + 1` begins; entry 0 is always 0. `\n`, `\r` and
/// `\r\n` all end a line, with `\r\n` counted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Scan `text` for line terminators.
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut starts = vec![0];
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 1;
                    starts.push(i + 1);
                }
                b'\r' | b'\n' => starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }

        Self { starts }
    }

    /// Line start offsets, in ascending order.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Number of lines. A trailing terminator opens one more (empty) line.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always `false`: even empty text has one line.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// The 1-based line containing `offset`.
    ///
    /// Offsets past the last line start belong to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset).max(1)
    }
}

/// Assign a line number to every rule below the root.
pub fn resolve_lines(index: &LineIndex, tree: &mut RuleTree) {
    let root = tree.root();
    resolve_children(index, tree, root);
}

fn resolve_children(index: &LineIndex, tree: &mut RuleTree, parent: RuleId) {
    let children = tree.children(parent).to_vec();
    for id in children {
        if let Some(rule) = tree.get_mut(id) {
            rule.line = Some(index.line_of(rule.start));
        }
        resolve_children(index, tree, id);
    }
}
