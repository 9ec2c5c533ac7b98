//! A parsed stylesheet kept together with the text it was parsed from.

use crate::css::parser::parse;
use crate::rules::{RuleData, RuleId, RuleTree};

/// Stylesheet source plus its rule tree.
///
/// Rule offsets only make sense against the exact text they came from, so the
/// two travel together.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    source: String,
    tree: RuleTree,
}

impl Stylesheet {
    /// Parse `source` and keep it alongside the resulting tree.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let tree = parse(&source);
        Self { source, tree }
    }

    /// The original stylesheet text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed rule tree.
    pub fn tree(&self) -> &RuleTree {
        &self.tree
    }

    /// Data of a single rule.
    pub fn rule(&self, id: RuleId) -> Option<&RuleData> {
        self.tree.get(id)
    }

    /// Source text covered by a rule, from the first selector character to the
    /// closing brace (exclusive) or the end of an `@import` statement.
    pub fn rule_text(&self, id: RuleId) -> Option<&str> {
        self.tree.get(id).and_then(|rule| self.source.get(rule.span()))
    }

    /// Top-level rules with the given selector, in document order.
    ///
    /// `None` means the selector does not occur at the top level.
    pub fn find_by_selector(&self, selector: &str) -> Option<Vec<RuleId>> {
        self.tree.find_by_selector(self.tree.root(), selector)
    }

    /// Line of the `occurrence`-th (0-based) top-level rule with `selector`.
    ///
    /// Occurrences past the last match resolve to the last match.
    pub fn line_for(&self, selector: &str, occurrence: usize) -> Option<usize> {
        let found = self.find_by_selector(selector)?;
        let id = found[occurrence.min(found.len() - 1)];
        self.tree.get(id).and_then(|rule| rule.line)
    }

    /// Line of the `index`-th top-level rule.
    pub fn line_for_index(&self, index: usize) -> Option<usize> {
        let id = self.tree.rule_at(index)?;
        self.tree.get(id).and_then(|rule| rule.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "/* c */ .x { }\n.y { }\n.x { color: red }\n";

    #[test]
    fn keeps_source() {
        let sheet = Stylesheet::parse(SHEET);
        assert_eq!(sheet.source(), SHEET);
        assert_eq!(sheet.tree().len(), 3);
    }

    #[test]
    fn repeated_selector_in_document_order() {
        let sheet = Stylesheet::parse(SHEET);
        let found = sheet.find_by_selector(".x").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(sheet.rule(found[0]).unwrap().line, Some(1));
        assert_eq!(sheet.rule(found[1]).unwrap().line, Some(3));
    }

    #[test]
    fn line_for_clamps_occurrence() {
        let sheet = Stylesheet::parse(SHEET);
        assert_eq!(sheet.line_for(".x", 0), Some(1));
        assert_eq!(sheet.line_for(".x", 1), Some(3));
        assert_eq!(sheet.line_for(".x", 7), Some(3));
        assert_eq!(sheet.line_for(".z", 0), None);
    }

    #[test]
    fn line_for_index() {
        let sheet = Stylesheet::parse(SHEET);
        assert_eq!(sheet.line_for_index(1), Some(2));
        assert_eq!(sheet.line_for_index(3), None);
    }

    #[test]
    fn rule_text_excludes_leading_comment() {
        let sheet = Stylesheet::parse(SHEET);
        let first = sheet.tree().rule_at(0).unwrap();
        assert_eq!(sheet.rule_text(first), Some(".x { "));

        let import = Stylesheet::parse("@import url(a.css);");
        let leaf = import.tree().rule_at(0).unwrap();
        assert_eq!(import.rule_text(leaf), Some("@import url(a.css);"));
    }
}
