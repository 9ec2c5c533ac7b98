//! Debug views of a parsed rule tree.
//!
//! Plain-text renderings for eyeballing where the parser placed each rule, and
//! for snapshot tests.

use crate::css::LineIndex;
use crate::rules::{RuleId, RuleTree};

/// One rule's position: the line it starts on and how deeply it is nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMarker {
    pub rule: RuleId,
    pub line: usize,
    pub depth: usize,
}

/// Markers for every resolved rule, in document order. Top-level rules are at
/// depth 0.
pub fn line_markers(tree: &RuleTree) -> Vec<LineMarker> {
    let mut markers = Vec::new();
    collect_markers(tree, tree.root(), 0, &mut markers);
    markers
}

fn collect_markers(tree: &RuleTree, parent: RuleId, depth: usize, out: &mut Vec<LineMarker>) {
    for &rule in tree.children(parent) {
        if let Some(line) = tree.get(rule).and_then(|data| data.line) {
            out.push(LineMarker { rule, line, depth });
        }
        collect_markers(tree, rule, depth + 1, out);
    }
}

/// Render `source` with a line-number column and one gutter column per nesting
/// depth. A `>` in column `d` marks a rule at depth `d` starting on that line.
///
/// Trailing whitespace is trimmed from every row.
pub fn render_markers(source: &str, tree: &RuleTree) -> String {
    let markers = line_markers(tree);
    let columns = markers.iter().map(|m| m.depth + 1).max().unwrap_or(0);
    let index = LineIndex::new(source);
    let starts = index.starts();
    let number_width = index.len().to_string().len();

    let mut rows = Vec::with_capacity(index.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(source.len());
        let text = source[start..end].trim_end_matches(['\r', '\n']);
        let line = i + 1;

        let mut gutter = vec![' '; columns];
        for marker in markers.iter().filter(|m| m.line == line) {
            gutter[marker.depth] = '>';
        }
        let gutter: String = gutter.into_iter().collect();

        let row = format!("{line:>number_width$} {gutter} {text}");
        rows.push(row.trim_end().to_string());
    }

    rows.join("\n")
}

/// Indented outline of the tree: selector, line, and span of every rule.
pub fn dump(tree: &RuleTree) -> String {
    let mut out = Vec::new();
    for (id, rule) in tree.rules() {
        let indent = "  ".repeat(tree.depth(id));
        let selector = rule.selector.as_deref().unwrap_or("?");
        let line = rule
            .line
            .map(|line| line.to_string())
            .unwrap_or_else(|| "?".to_string());
        out.push(format!(
            "{indent}{selector} (line {line}) [{}..{}]",
            rule.start, rule.end
        ));
    }
    out.join("\n")
}
