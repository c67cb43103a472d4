//! # Storage Configuration
//!
//! Credentials and endpoint for the hosted contact database.
//! Resolved once at startup; immutable for the lifetime of the tool.

use crate::error::ConfigError;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the contact database API key
pub const API_KEY_ENV: &str = "GIBSONAI_API_KEY";

/// Optional environment override for the API base URL
pub const BASE_URL_ENV: &str = "GIBSONAI_API_BASE_URL";

/// Hosted API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.gibsonai.com/v1/-";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-Gibson-API-Key";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the contact storage tool
///
/// ## Example
/// ```rust,ignore
/// use contact_finder_core::config::StorageConfig;
///
/// // From GIBSONAI_API_KEY / GIBSONAI_API_BASE_URL
/// let config = StorageConfig::from_env()?;
///
/// // Explicit (tests, self-hosted)
/// let config = StorageConfig::new("key").with_base_url("http://localhost:9000");
/// ```
#[derive(Clone)]
pub struct StorageConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl StorageConfig {
    /// Create a config for the hosted API with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load from the process environment.
    ///
    /// Fails if the API key is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    /// Override the base URL (trailing slashes are dropped)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for an API resource, e.g. `sales-company`
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = StorageConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(API_KEY_ENV)));
        assert!(err.to_string().contains("GIBSONAI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_fails() {
        let result = StorageConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = StorageConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "secret")])).unwrap();
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.endpoint("sales-company"),
            "https://api.gibsonai.com/v1/-/sales-company"
        );
    }

    #[test]
    fn test_base_url_override() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "secret"),
            (BASE_URL_ENV, "http://localhost:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint("sales-contact"), "http://localhost:9000/sales-contact");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = StorageConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
