//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Production host of the Pluggy API.
pub const DEFAULT_BASE_URL: &str = "https://api.pluggy.ai";

/// Default cap on the number of pages a full listing will fetch.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Configuration for the Pluggy client.
///
/// # Example
///
/// ```
/// use pluggy_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Upper bound on pages fetched by `list_all`; `None` trusts the server
    pub max_pages: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("pluggy-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host (sandbox, proxy, mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set or remove the page cap used by full listings.
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Parse and check the base URL.
    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "Unsupported base URL scheme '{}' in {}",
                other, self.base_url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.pluggy.ai");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_pages, Some(DEFAULT_MAX_PAGES));
        assert!(config.user_agent.starts_with("pluggy-rs/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_max_pages(None);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_pages, None);
    }

    #[test]
    fn test_base_url_validation() {
        assert!(ClientConfig::default().parsed_base_url().is_ok());

        let err = ClientConfig::default()
            .with_base_url("not a url")
            .parsed_base_url()
            .unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));

        let err = ClientConfig::default()
            .with_base_url("ftp://api.pluggy.ai")
            .parsed_base_url()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
