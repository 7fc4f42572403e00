//! Client configuration: API key, base URL, timeout, and retry budget.
//!
//! A [`Config`] is immutable once handed to a client; concurrent calls
//! share it without synchronization.

use std::time::Duration;

use crate::error::Error;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.centavo.io";

/// Per-attempt request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Additional attempts after the first failed one.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Prefix carried by live-mode secret keys.
pub const LIVE_KEY_PREFIX: &str = "sk_live_";

/// Prefix carried by test-mode secret keys.
pub const TEST_KEY_PREFIX: &str = "sk_test_";

/// Connection settings for a [`Client`](crate::Client).
///
/// Built with [`Config::new`], which validates the secret key prefix
/// up front so a malformed key fails before any request is made.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: u32,
}

impl Config {
    /// Create a configuration from a secret key.
    ///
    /// The key must start with `sk_live_` or `sk_test_`; anything else
    /// fails immediately with [`Error::Config`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if !api_key.starts_with(LIVE_KEY_PREFIX) && !api_key.starts_with(TEST_KEY_PREFIX) {
            return Err(Error::Config(format!(
                "secret key must start with {LIVE_KEY_PREFIX} or {TEST_KEY_PREFIX}"
            )));
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Override the API base URL (e.g. a mock server in tests).
    ///
    /// Trailing slashes are trimmed so path templates can always start
    /// with `/v1/...`.
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, Error> {
        let base_url = base_url.as_ref();
        url::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Override the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry budget (additional attempts after the first).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// True iff the secret key is a test-mode key.
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with(TEST_KEY_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_live_and_test_keys() {
        assert!(Config::new("sk_live_abc").is_ok());
        assert!(Config::new("sk_test_abc").is_ok());
    }

    #[test]
    fn test_rejects_unprefixed_key() {
        // Construction-time failures are the config category, not
        // Authentication (that one is reserved for server 401/403s).
        match Config::new("pk_test_abc").unwrap_err() {
            Error::Config(message) => {
                assert!(message.contains("sk_live_"));
                assert!(message.contains("sk_test_"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(Config::new("").is_err());
        assert!(Config::new("sk_abc").is_err());
    }

    #[test]
    fn test_mode_follows_key_prefix() {
        assert!(Config::new("sk_test_abc").unwrap().is_test_mode());
        assert!(!Config::new("sk_live_abc").unwrap().is_test_mode());
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = Config::new("sk_test_abc")
            .unwrap()
            .base_url("http://localhost:8080/")
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        let config = Config::new("sk_test_abc").unwrap();
        assert!(config.base_url("not a url").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("sk_test_abc").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    }
}
