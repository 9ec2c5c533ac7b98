//! Parsed stylesheets keyed by href.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::css::Stylesheet;

use super::loader::{LoadError, StylesheetLoader};

/// Cache of parsed stylesheets.
///
/// Each href is loaded and parsed at most once. Failed loads are not cached, so
/// a stylesheet that is not available yet can be retried later.
#[derive(Debug, Default)]
pub struct StylesheetCache {
    sheets: HashMap<String, Stylesheet>,
}

impl StylesheetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stylesheet that has already been loaded.
    pub fn get(&self, href: &str) -> Option<&Stylesheet> {
        self.sheets.get(href)
    }

    /// Return the cached stylesheet for `href`, loading and parsing it first if
    /// needed.
    pub fn load<L>(&mut self, href: &str, loader: &L) -> Result<&Stylesheet, LoadError>
    where
        L: StylesheetLoader + ?Sized,
    {
        match self.sheets.entry(href.to_string()) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let source = loader.load(href).inspect_err(|err| {
                    tracing::warn!(href, error = %err, "failed to load stylesheet");
                })?;
                tracing::debug!(href, bytes = source.len(), "loaded stylesheet");
                Ok(&*entry.insert(Stylesheet::parse(source)))
            }
        }
    }

    /// Parse `source` and store it under `href`, replacing any previous entry.
    pub fn insert(&mut self, href: impl Into<String>, source: impl Into<String>) -> &Stylesheet {
        let href = href.into();
        let sheet = Stylesheet::parse(source);
        match self.sheets.entry(href) {
            Entry::Occupied(mut entry) => {
                entry.insert(sheet);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(sheet),
        }
    }

    /// Drop a cached stylesheet so the next [`load`](Self::load) fetches it again.
    pub fn invalidate(&mut self, href: &str) -> bool {
        self.sheets.remove(href).is_some()
    }

    /// Number of cached stylesheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
