//! Inspector configuration.

/// Configuration for [`RuleAnnotator`](super::RuleAnnotator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    /// When a host reports a selector more often than the stylesheet defines it,
    /// reuse the line of the last definition instead of reporting no line.
    pub clamp_repeated_selectors: bool,
    /// Use the full stylesheet URL in link titles instead of just the file name.
    pub full_url_titles: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            clamp_repeated_selectors: true,
            full_url_titles: false,
        }
    }
}

impl InspectorConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether repeated selectors fall back to the last definition (builder).
    pub fn with_clamp_repeated_selectors(mut self, clamp: bool) -> Self {
        self.clamp_repeated_selectors = clamp;
        self
    }

    /// Set whether link titles show the full URL (builder).
    pub fn with_full_url_titles(mut self, full: bool) -> Self {
        self.full_url_titles = full;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InspectorConfig::new();
        assert!(config.clamp_repeated_selectors);
        assert!(!config.full_url_titles);
    }

    #[test]
    fn builders() {
        let config = InspectorConfig::new()
            .with_clamp_repeated_selectors(false)
            .with_full_url_titles(true);
        assert!(!config.clamp_repeated_selectors);
        assert!(config.full_url_titles);
    }
}
