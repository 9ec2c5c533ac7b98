//! Line annotation for rules a host has matched against an element.
//!
//! A host knows which rules apply to an element, but only by selector text and
//! stylesheet href. The annotator maps each of them back to a source line. When
//! the same selector appears several times in one stylesheet, the n-th report
//! of that selector maps to its n-th definition.

use std::collections::HashMap;

use crate::css::normalize_selector;

use super::cache::StylesheetCache;
use super::config::InspectorConfig;
use super::loader::StylesheetLoader;

/// A rule as reported by the host, in the host's matching order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRule {
    /// URL of the stylesheet the rule lives in. `None` for inline styles.
    pub href: Option<String>,
    /// Selector text as the host formats it.
    pub selector_text: String,
}

impl MatchedRule {
    /// A rule from the stylesheet at `href`.
    pub fn new(href: impl Into<String>, selector_text: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            selector_text: selector_text.into(),
        }
    }

    /// A rule with no stylesheet behind it.
    pub fn inline(selector_text: impl Into<String>) -> Self {
        Self {
            href: None,
            selector_text: selector_text.into(),
        }
    }
}

/// Result of annotating one element's matched rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Line per input rule, same order as the input.
    pub lines: Vec<Option<usize>>,
    /// Whether some rule with a stylesheet could not be given a line, either
    /// because its stylesheet failed to load or because its selector was not found.
    pub has_unmatched: bool,
}

/// Maps host-matched rules to stylesheet lines.
#[derive(Debug, Clone, Default)]
pub struct RuleAnnotator {
    config: InspectorConfig,
}

impl RuleAnnotator {
    /// Create an annotator with the given configuration.
    pub fn new(config: InspectorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Assign a line to every rule matched for one element.
    ///
    /// Stylesheets are loaded through `cache`. A stylesheet that cannot be loaded
    /// leaves its rules without a line rather than failing the whole request.
    pub fn annotate<L>(
        &self,
        cache: &mut StylesheetCache,
        loader: &L,
        rules: &[MatchedRule],
    ) -> Annotation
    where
        L: StylesheetLoader + ?Sized,
    {
        let mut seen: HashMap<(&str, String), usize> = HashMap::new();
        let mut annotation = Annotation::default();

        for rule in rules {
            let Some(href) = rule.href.as_deref() else {
                annotation.lines.push(None);
                continue;
            };

            let selector = normalize_selector(&rule.selector_text);
            let occurrence = seen.entry((href, selector.clone())).or_insert(0);
            let nth = *occurrence;
            *occurrence += 1;

            let line = match cache.load(href, loader) {
                Ok(sheet) => match sheet.find_by_selector(&selector) {
                    Some(found) if nth < found.len() || self.config.clamp_repeated_selectors => {
                        let id = found[nth.min(found.len() - 1)];
                        sheet.rule(id).and_then(|rule| rule.line)
                    }
                    _ => None,
                },
                Err(_) => None,
            };

            if line.is_none() {
                tracing::debug!(href, selector = %selector, "no source line for matched rule");
                annotation.has_unmatched = true;
            }
            annotation.lines.push(line);
        }

        annotation
    }

    /// Line of the `index`-th top-level rule of the stylesheet at `href`.
    ///
    /// For hosts that identify a rule by its position in the stylesheet's
    /// top-level rule list rather than by selector.
    pub fn line_for_index<L>(
        &self,
        cache: &mut StylesheetCache,
        loader: &L,
        href: &str,
        index: usize,
    ) -> Option<usize>
    where
        L: StylesheetLoader + ?Sized,
    {
        cache.load(href, loader).ok()?.line_for_index(index)
    }

    /// Title for a link to `line` of the stylesheet at `url`, e.g. `main.css:12`.
    pub fn link_title(&self, url: &str, line: usize) -> String {
        if self.config.full_url_titles {
            format!("{url}:{line}")
        } else {
            format!("{}:{line}", display_name_for_url(url))
        }
    }
}

/// Short display name for a stylesheet URL: its last path segment.
///
/// Query strings and fragments are dropped. URLs without a usable last segment
/// are returned unchanged.
pub fn display_name_for_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/').rsplit('/').next() {
        Some(name) if !name.is_empty() && !name.ends_with(':') => name,
        _ => url,
    }
}
