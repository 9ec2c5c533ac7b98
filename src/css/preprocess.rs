//! Rule preprocessing: selector extraction and start offset correction.

use crate::css::selector::{normalize_selector, strip_prelude};
use crate::rules::{RuleId, RuleTree};

/// Fill in the selector of every rule below the root and move each rule's
/// `start` past leading whitespace and comments.
///
/// The prelude is the raw text between a rule's `start` and its `body_start`.
/// Parents are processed before their children.
pub fn preprocess(text: &str, tree: &mut RuleTree) {
    let root = tree.root();
    preprocess_children(text, tree, root);
}

fn preprocess_children(text: &str, tree: &mut RuleTree, parent: RuleId) {
    let children = tree.children(parent).to_vec();
    for id in children {
        if let Some(rule) = tree.get_mut(id) {
            let raw = text.get(rule.start..rule.body_start).unwrap_or("");
            let (stripped, prelude) = strip_prelude(raw);
            rule.start += stripped;
            rule.selector = Some(normalize_selector(prelude));
        }
        preprocess_children(text, tree, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::scanner::scan;
    use pretty_assertions::assert_eq;

    fn preprocessed(text: &str) -> RuleTree {
        let mut tree = scan(text);
        preprocess(text, &mut tree);
        tree
    }

    fn selectors(tree: &RuleTree) -> Vec<(usize, String)> {
        tree.rules()
            .map(|(_, rule)| (rule.start, rule.selector.clone().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn selector_list_is_normalized() {
        let tree = preprocessed("a,  b\n{color:red}");
        assert_eq!(selectors(&tree), vec![(0, "a,b".to_string())]);
    }

    #[test]
    fn leading_comment_moves_start() {
        let tree = preprocessed("/* hi */ .a { }");
        assert_eq!(selectors(&tree), vec![(9, ".a".to_string())]);
    }

    #[test]
    fn whitespace_between_rules_is_skipped() {
        let tree = preprocessed(".a {}\n\n  .b {}");
        assert_eq!(
            selectors(&tree),
            vec![(0, ".a".to_string()), (9, ".b".to_string())]
        );
    }

    #[test]
    fn nested_rules_get_selectors() {
        let tree = preprocessed("@media screen {\n  /* x */\n  p > a { }\n}");
        assert_eq!(
            selectors(&tree),
            vec![(0, "@media screen".to_string()), (28, "p > a".to_string())]
        );
    }

    #[test]
    fn import_selector() {
        let tree = preprocessed("@import url(a.css);\n.x{}");
        assert_eq!(
            selectors(&tree),
            vec![(0, "@import".to_string()), (20, ".x".to_string())]
        );
    }

    #[test]
    fn root_stays_unset() {
        let tree = preprocessed("a{}");
        let root = tree.get(tree.root()).unwrap();
        assert!(root.selector.is_none());
        assert_eq!(root.start, 0);
    }

    #[test]
    fn multiline_selector() {
        let tree = preprocessed("h1,\nh2,\r\nh3 {}");
        assert_eq!(selectors(&tree), vec![(0, "h1,h2,h3".to_string())]);
    }
}
