//! Configuration for the portal client.

/// Configuration for the `PortalClient` and its views
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the portal REST API
    pub base_url: String,
    /// Maximum generation distance requested from the family history endpoint
    pub family_max_depth: u32,
    /// Language code passed to localized endpoints
    pub language: String,
    /// How many diseased members the family tree view auto-expands on load
    pub auto_expand_limit: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001/api/v1".to_string(),
            family_max_depth: 3,
            language: "en".to_string(),
            auto_expand_limit: 3,
        }
    }
}

impl PortalConfig {
    /// Override the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the requested family tree depth
    #[must_use]
    pub const fn with_family_max_depth(mut self, depth: u32) -> Self {
        self.family_max_depth = depth;
        self
    }

    /// Override the language code
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
