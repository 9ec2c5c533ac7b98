//! # css-linemap
//!
//! A structural CSS stylesheet parser that remembers where every rule came from.
//!
//! css-linemap does not try to understand CSS. It finds rule boundaries
//! (comments, `@import` statements, and `{ }` nesting), records each rule's byte
//! span and 1-based line number, and normalizes its selector. That is enough to
//! answer the question an inspector UI keeps asking: "this element matched the
//! rule `.btn, .link` from `main.css`, which line is that on?"
//!
//! ## Core Systems
//!
//! - **[`css`]** — Structural scanner, selector normalization, line resolution
//! - **[`rules`]** — Slotmap-backed rule tree with selector queries
//! - **[`inspector`]** — Stylesheet loading, caching, and line annotation for hosts
//! - **[`visualize`]** — Text renderings of a parsed tree for debugging
//!
//! ```
//! use css_linemap::{parse, normalize_selector};
//!
//! let tree = parse("/* base */\n.a,\n.b { color: red }\n.a { margin: 0 }");
//! let found = tree.find_by_selector(tree.root(), ".a, .b").unwrap();
//! assert_eq!(tree.get(found[0]).unwrap().line, Some(2));
//! assert_eq!(normalize_selector(" .a ,\n.b "), ".a,.b");
//! ```

// Core systems
pub mod css;
pub mod rules;

// Host integration
pub mod inspector;

// Debugging
pub mod visualize;

pub use css::{normalize_selector, parse, Stylesheet};
pub use rules::{RuleData, RuleId, RuleTree};
