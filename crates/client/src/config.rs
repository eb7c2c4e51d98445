//! Client configuration.

use std::time::Duration;

use dheeto_shared::ApiConfig;

/// Settings for one [`ApiClient`](crate::ApiClient) instance.
///
/// Built explicitly and passed in; there is no process-wide client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Page size used when walking paginated lists.
    pub page_size: u32,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout and page size.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(5),
            page_size: 50,
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the page size (minimum 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl From<&ApiConfig> for ClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_page_size(config.page_size)
    }
}
