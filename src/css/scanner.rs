//! Structural scanner: finds rule boundaries without parsing rule contents.
//!
//! A single left-to-right pass over the text, driven by a logos lexer that only
//! recognizes the structural markers (`/*`, `*/`, `@import`, `{`, `}`). Runs of
//! any other characters are skipped. The result is a [`RuleTree`] whose rules
//! carry raw `start`/`body_start`/`end` offsets; selectors and line numbers are
//! filled in later by [`preprocess`](crate::css::preprocess) and
//! [`resolve_lines`](crate::css::lines::resolve_lines).

use std::sync::OnceLock;

use logos::Logos;
use regex::Regex;

use crate::rules::{RuleData, RuleId, RuleTree};

/// The `@import` keyword. Its length is where an import leaf's body starts.
pub const IMPORT_KEYWORD: &str = "@import";

/// Structural token produced by the scanner's lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^/*@{}]+")]
pub enum Token {
    /// `/*`
    #[token("/*")]
    CommentOpen,

    /// `*/`
    #[token("*/")]
    CommentClose,

    /// `@import`, case-sensitive.
    #[token("@import")]
    Import,

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    // ── Markers that did not form a longer token ────────────────────

    /// `/`
    #[token("/")]
    Slash,

    /// `*`
    #[token("*")]
    Star,

    /// `@` of any other at-rule.
    #[token("@")]
    At,
}

/// Full `@import url(...)` statement, anchored at the `@`.
///
/// The quote that opens the URL may close it again, in which case the closing
/// quote is part of the statement. Alternation order stands in for a
/// backreference: quoted forms are tried first, the bare form last.
fn import_statement() -> &'static Regex {
    static IMPORT_RE: OnceLock<Regex> = OnceLock::new();
    IMPORT_RE.get_or_init(|| {
        Regex::new(r#"^@import\s*url\((?:'.+?'?|".+?"?|.+?)\);?"#).expect("invalid @import regex")
    })
}

/// Length of the `@import` statement at the start of `text`, if there is one.
pub fn match_import(text: &str) -> Option<usize> {
    import_statement().find(text).map(|m| m.end())
}

/// Scan `text` into a tree of raw rule spans.
///
/// Never fails: unbalanced braces and unterminated comments degrade to a
/// best-effort tree. Rules still open at the end of the text end at `text.len()`.
pub fn scan(text: &str) -> RuleTree {
    let mut tree = RuleTree::new();
    let root = tree.root();
    let mut open: Vec<RuleId> = Vec::new();
    let mut current = root;
    let mut comment_depth = 0usize;
    // Where the prelude of the next rule begins.
    let mut rule_start = 0;

    let mut lexer = Token::lexer(text);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            continue;
        };

        match token {
            Token::CommentOpen => comment_depth += 1,
            Token::CommentClose => comment_depth = comment_depth.saturating_sub(1),
            Token::Slash | Token::Star | Token::At => {}
            _ if comment_depth > 0 => {}
            Token::Import => match match_import(&text[span.start..]) {
                Some(len) => {
                    tree.insert_child(
                        current,
                        RuleData::new(
                            span.start,
                            span.start + IMPORT_KEYWORD.len(),
                            span.start + len,
                        ),
                    );
                    lexer.bump(len - span.len());
                    rule_start = span.start + len;
                }
                None => {
                    tracing::debug!(offset = span.start, "@import without a url() statement");
                }
            },
            Token::BraceOpen => {
                let id = tree.insert_child(current, RuleData::new(rule_start, span.start, text.len()));
                open.push(id);
                current = id;
                rule_start = span.end;
            }
            Token::BraceClose => {
                match open.pop() {
                    Some(id) => {
                        if let Some(rule) = tree.get_mut(id) {
                            rule.end = span.start;
                        }
                        current = tree.parent(id).unwrap_or(root);
                    }
                    None => tracing::debug!(offset = span.start, "ignoring unbalanced closing brace"),
                }
                rule_start = span.end;
            }
        }
    }

    if !open.is_empty() {
        tracing::debug!(unterminated = open.len(), "rules left open at end of stylesheet");
    }
    if comment_depth > 0 {
        tracing::debug!("stylesheet ends inside a comment");
    }

    tree
}
