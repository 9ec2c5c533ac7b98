//! Host integration: loading, caching, and line annotation for inspector UIs.

pub mod config;
pub mod loader;
pub mod cache;
pub mod annotate;

pub use annotate::{display_name_for_url, Annotation, MatchedRule, RuleAnnotator};
pub use cache::StylesheetCache;
pub use config::InspectorConfig;
pub use loader::{FsLoader, LoadError, MemoryLoader, StylesheetLoader};
