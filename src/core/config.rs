//! Client construction and configuration defaults
//!
//! This module provides the builder used to customize the lookup client
//! beyond its defaults. Credential sourcing (environment, config file,
//! secret store) is the embedding application's responsibility; the builder
//! only takes the key it is given.

use crate::core::client::Client;
use std::time::Duration;

/// Default base URL of the lookup service
pub const DEFAULT_BASE_URL: &str = "https://ono.4b.rs";

/// Default request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`Client`]
///
/// # Example
///
/// ```no_run
/// use forebears::Client;
/// use std::time::Duration;
///
/// let client = Client::builder("my-api-key")
///     .timeout(Duration::from_secs(5))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a builder with the default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the service base URL (scheme and host, no trailing slash)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout
    ///
    /// A request that exceeds the deadline fails with a transport error for
    /// which [`LookupError::is_timeout`](crate::LookupError::is_timeout)
    /// returns true.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client with a fresh HTTP transport
    pub fn build(self) -> Client {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Client::from_parts(self.api_key, self.base_url, http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::new("key");
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(builder.timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = ClientBuilder::new("key")
            .base_url("http://127.0.0.1:9000")
            .timeout(Duration::from_secs(5));
        assert_eq!(builder.base_url, "http://127.0.0.1:9000");
        assert_eq!(builder.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let builder = ClientBuilder::new("key").base_url("https://ono.4b.rs/");
        assert_eq!(builder.base_url, "https://ono.4b.rs");
    }
}
