//! Stylesheet parsing pipeline.
//!
//! Runs the structural [`scan`], then [`preprocess`] for selectors, then
//! [`resolve_lines`] for line numbers. Parsing never fails; malformed input
//! yields a best-effort tree.

use crate::css::lines::{resolve_lines, LineIndex};
use crate::css::preprocess::preprocess;
use crate::css::scanner::scan;
use crate::rules::RuleTree;

/// Parse stylesheet text into a tree of rules with selectors and line numbers.
///
/// ```
/// use css_linemap::parse;
///
/// let tree = parse("\n.foo {}");
/// let foo = tree.rule_at(0).unwrap();
/// assert_eq!(tree.get(foo).unwrap().line, Some(2));
/// ```
pub fn parse(text: &str) -> RuleTree {
    let mut tree = scan(text);
    preprocess(text, &mut tree);

    let index = LineIndex::new(text);
    resolve_lines(&index, &mut tree);

    tracing::trace!(rules = tree.len(), lines = index.len(), "parsed stylesheet");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleData;
    use pretty_assertions::assert_eq;

    fn resolved(tree: &RuleTree) -> Vec<(String, usize)> {
        tree.rules()
            .map(|(_, rule)| {
                (
                    rule.selector.clone().unwrap_or_default(),
                    rule.line.unwrap_or_default(),
                )
            })
            .collect()
    }

    #[test]
    fn every_rule_is_resolved() {
        let tree = parse("a {}\n@media print {\n  b {}\n}\n");
        assert!(tree.rules().all(|(_, rule)| rule.is_resolved()));
        let root: &RuleData = tree.get(tree.root()).unwrap();
        assert!(root.line.is_none());
        assert!(root.selector.is_none());
    }

    #[test]
    fn leading_blank_line() {
        let tree = parse("\n.foo{}");
        assert_eq!(resolved(&tree), vec![(".foo".to_string(), 2)]);
    }

    #[test]
    fn line_counts_from_selector_not_comment() {
        let tree = parse("/* header\n   comment */\n.a {}");
        assert_eq!(resolved(&tree), vec![(".a".to_string(), 3)]);
    }

    #[test]
    fn line_endings_do_not_change_lines() {
        let unix = parse("a {}\n\nb,\nc {\n}\n@media x {\n  d {}\n}");
        let windows = parse("a {}\r\n\r\nb,\r\nc {\r\n}\r\n@media x {\r\n  d {}\r\n}");
        assert_eq!(resolved(&unix), resolved(&windows));
        assert_eq!(
            resolved(&unix),
            vec![
                ("a".to_string(), 1),
                ("b,c".to_string(), 3),
                ("@media x".to_string(), 6),
                ("d".to_string(), 7),
            ]
        );
    }

    #[test]
    fn spans_stay_ordered() {
        let tree = parse("/* c */ .x { } .y { } @media z { .w { } }");
        for (_, rule) in tree.rules() {
            assert!(rule.start <= rule.body_start);
            assert!(rule.body_start <= rule.end);
        }
    }

    #[test]
    fn nested_comment_opener_keeps_comment_open() {
        let tree = parse("/* /* */ a{} */ b{}");
        assert_eq!(tree.len(), 1);
        let rule = tree.get(tree.rule_at(0).unwrap()).unwrap();
        assert_eq!(rule.selector.as_deref(), Some("a{} */ b"));
        assert_eq!((rule.start, rule.body_start, rule.end), (9, 17, 18));
        assert_eq!(rule.line, Some(1));
    }

    #[test]
    fn offsets_are_bytes() {
        let tree = parse(".\u{e9}{}");
        let rule = tree.get(tree.rule_at(0).unwrap()).unwrap();
        assert_eq!(rule.selector.as_deref(), Some(".\u{e9}"));
        assert_eq!((rule.start, rule.body_start, rule.end), (0, 3, 4));
    }

    #[test]
    fn empty_stylesheet() {
        let tree = parse("");
        assert!(tree.is_empty());
    }
}
