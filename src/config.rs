//! Fetcher configuration

use std::time::Duration;

/// Default weatherapi.com v1 endpoint root
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Default upper bound on one request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing weather API key: set WEATHER_API_KEY or pass --api-key")]
    MissingApiKey,
    #[error("timeout must be at least one second")]
    InvalidTimeout,
    #[error("could not build HTTP client: {0}")]
    HttpClient(String),
}

/// Settings for [`crate::api::WeatherClient`]
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Validate raw settings. A missing or blank key fails here, before any request.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        if timeout < Duration::from_secs(1) {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn with_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(
            Some(api_key.into()),
            DEFAULT_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

// The API key must not appear in Debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_fast() {
        let err = Config::new(None, DEFAULT_BASE_URL, Duration::from_secs(10)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(err.to_string().contains("WEATHER_API_KEY"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let err = Config::new(Some("  ".into()), DEFAULT_BASE_URL, Duration::from_secs(10))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::new(Some("k".into()), DEFAULT_BASE_URL, Duration::ZERO).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout));
    }

    #[test]
    fn test_defaults_and_trailing_slash() {
        let config = Config::new(
            Some("secret".into()),
            "http://localhost:9000/v1/",
            Duration::from_secs(3),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");

        let config = Config::with_key("secret").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::with_key("super-secret").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
