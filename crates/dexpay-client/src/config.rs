//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api-dpay.dexchange.sn/api/v1";

/// Request timeout used when none is configured (30 seconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// DexPay client configuration. Immutable once handed to [`crate::DexPay`].
#[derive(Clone, PartialEq, Eq)]
pub struct DexPayConfig {
    /// Public API key (`pk_test_...` or `pk_live_...`).
    pub api_key: String,

    /// Secret API key (`sk_test_...` or `sk_live_...`).
    pub api_secret: String,

    /// Base URL override (default: [`DEFAULT_BASE_URL`]).
    pub base_url: Option<String>,

    /// Timeout in milliseconds (default: [`DEFAULT_TIMEOUT_MS`]). Zero means default.
    pub timeout_ms: Option<u64>,
}

impl DexPayConfig {
    /// Create a configuration with default base URL and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: None,
            timeout_ms: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `DEXPAY_API_KEY`, `DEXPAY_API_SECRET` (required)
    /// - `DEXPAY_BASE_URL` (optional)
    /// - `DEXPAY_TIMEOUT_MS` (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is missing or the timeout is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("DEXPAY_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let api_secret = lookup("DEXPAY_API_SECRET").ok_or(ConfigError::MissingApiSecret)?;

        let timeout_ms = lookup("DEXPAY_TIMEOUT_MS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))
            })
            .transpose()?;

        let config = Self {
            api_key,
            api_secret,
            base_url: lookup("DEXPAY_BASE_URL"),
            timeout_ms,
        };
        config.validate()?;

        tracing::debug!(
            base_url = %config.base_url(),
            timeout = ?config.timeout(),
            "Loaded DexPay configuration from environment"
        );
        Ok(config)
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Check that both credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] or [`ConfigError::MissingApiSecret`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.api_secret.is_empty() {
            return Err(ConfigError::MissingApiSecret);
        }
        Ok(())
    }

    /// Effective base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Effective timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(
            self.timeout_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        )
    }
}

impl fmt::Debug for DexPayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DexPayConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = DexPayConfig::new("pk_test_1", "sk_test_1");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn builder_overrides() {
        let config = DexPayConfig::new("pk", "sk")
            .with_base_url("http://localhost:4000/api/v1/")
            .with_timeout_ms(1500);
        assert_eq!(config.base_url(), "http://localhost:4000/api/v1");
        assert_eq!(config.timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn zero_timeout_and_empty_url_fall_back_to_defaults() {
        let config = DexPayConfig::new("pk", "sk")
            .with_base_url("")
            .with_timeout_ms(0);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn validate_requires_both_credentials() {
        assert!(matches!(
            DexPayConfig::new("", "sk").validate(),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            DexPayConfig::new("pk", "").validate(),
            Err(ConfigError::MissingApiSecret)
        ));
        assert!(DexPayConfig::new("pk", "sk").validate().is_ok());
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", DexPayConfig::new("pk_test_1", "sk_test_secret"));
        assert!(rendered.contains("pk_test_1"));
        assert!(!rendered.contains("sk_test_secret"));
    }

    #[test]
    fn from_lookup_reads_all_fields() {
        let config = DexPayConfig::from_lookup(lookup(&[
            ("DEXPAY_API_KEY", "pk_live_1"),
            ("DEXPAY_API_SECRET", "sk_live_1"),
            ("DEXPAY_BASE_URL", "https://sandbox.example/api/v1"),
            ("DEXPAY_TIMEOUT_MS", "5000"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "pk_live_1");
        assert_eq!(config.base_url(), "https://sandbox.example/api/v1");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn from_lookup_missing_secret() {
        let result = DexPayConfig::from_lookup(lookup(&[("DEXPAY_API_KEY", "pk")]));
        assert!(matches!(result, Err(ConfigError::MissingApiSecret)));
    }

    #[test]
    fn from_lookup_rejects_bad_timeout() {
        let result = DexPayConfig::from_lookup(lookup(&[
            ("DEXPAY_API_KEY", "pk"),
            ("DEXPAY_API_SECRET", "sk"),
            ("DEXPAY_TIMEOUT_MS", "thirty"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(raw)) if raw == "thirty"));
    }
}
