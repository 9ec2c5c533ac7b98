//! Stylesheet loaders: where stylesheet text comes from.
//!
//! The parser never does I/O. Hosts hand a loader to the
//! [`StylesheetCache`](super::StylesheetCache), which calls it once per href.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from loading stylesheet text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("stylesheet not found: {href}")]
    NotFound { href: String },
    #[error("unsupported stylesheet url: {href}")]
    UnsupportedScheme { href: String },
    #[error("failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fetches the full, decoded text of a stylesheet.
pub trait StylesheetLoader {
    /// Load the stylesheet identified by `href`.
    fn load(&self, href: &str) -> Result<String, LoadError>;
}

/// Loads stylesheets from the local filesystem.
///
/// `file://` URLs are read as absolute paths. Other hrefs without a scheme are
/// resolved against the loader's root directory. Query strings and fragments are
/// ignored.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    /// Create a loader resolving relative hrefs against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory relative hrefs are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an href to a filesystem path.
    pub fn resolve(&self, href: &str) -> Result<PathBuf, LoadError> {
        let href_path = href
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if let Some(path) = href_path.strip_prefix("file://") {
            return Ok(PathBuf::from(path));
        }
        if href_path.contains("://") {
            return Err(LoadError::UnsupportedScheme {
                href: href.to_string(),
            });
        }
        Ok(self.root.join(href_path))
    }
}

impl StylesheetLoader for FsLoader {
    fn load(&self, href: &str) -> Result<String, LoadError> {
        let path = self.resolve(href)?;
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                href: href.to_string(),
            },
            _ => LoadError::Io { path, source },
        })
    }
}

/// Serves stylesheets from memory, keyed by href.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    sheets: HashMap<String, String>,
}

impl MemoryLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stylesheet (builder).
    pub fn with_sheet(mut self, href: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(href, source);
        self
    }

    /// Add or replace a stylesheet.
    pub fn insert(&mut self, href: impl Into<String>, source: impl Into<String>) {
        self.sheets.insert(href.into(), source.into());
    }
}

impl StylesheetLoader for MemoryLoader {
    fn load(&self, href: &str) -> Result<String, LoadError> {
        self.sheets
            .get(href)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                href: href.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_loader_serves_sheets() {
        let loader = MemoryLoader::new().with_sheet("a.css", "a {}");
        assert_eq!(loader.load("a.css").unwrap(), "a {}");
    }

    #[test]
    fn memory_loader_missing() {
        let loader = MemoryLoader::new();
        let err = loader.load("nope.css").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "stylesheet not found: nope.css");
    }

    #[test]
    fn fs_loader_resolves_relative_hrefs() {
        let loader = FsLoader::new("/srv/site");
        assert_eq!(
            loader.resolve("css/main.css?v=3").unwrap(),
            PathBuf::from("/srv/site/css/main.css")
        );
    }

    #[test]
    fn fs_loader_resolves_file_urls() {
        let loader = FsLoader::new("/srv/site");
        assert_eq!(
            loader.resolve("file:///tmp/x.css#top").unwrap(),
            PathBuf::from("/tmp/x.css")
        );
    }

    #[test]
    fn fs_loader_rejects_remote_urls() {
        let loader = FsLoader::new(".");
        let err = loader.resolve("https://example.com/a.css").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedScheme { .. }));
    }

    #[test]
    fn fs_loader_reads_files() {
        let dir = std::env::temp_dir().join(format!("css-linemap-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("site.css"), "body {}\n").unwrap();

        let loader = FsLoader::new(&dir);
        assert_eq!(loader.load("site.css").unwrap(), "body {}\n");
        assert!(matches!(
            loader.load("missing.css"),
            Err(LoadError::NotFound { .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
