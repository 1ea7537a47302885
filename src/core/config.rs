//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::{Result, TextitError};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://textit.ego-ai.tech/api/1.0/data";

/// Default request timeout, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration of a [`crate::TextitClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint the commands are posted to
    pub base_url: String,
    /// Bearer token sent with every request, when the deployment
    /// requires one
    pub api_key: Option<String>,
    /// Request timeout in milliseconds, enforced by the transport
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `TEXTIT_API_URL`, `TEXTIT_API_KEY` and
    /// `TEXTIT_TIMEOUT_MS`; anything unset keeps its default.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("TEXTIT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_key = std::env::var("TEXTIT_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let timeout_ms = match std::env::var("TEXTIT_TIMEOUT_MS") {
            Ok(value) => value.parse::<u64>().map_err(|_| TextitError::ConfigError {
                message: format!("TEXTIT_TIMEOUT_MS is not a number: {value}"),
            })?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout_ms,
        })
    }

    /// Load from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| TextitError::ConfigError {
            message: format!("cannot read {}: {e}", path.as_ref().display()),
        })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| TextitError::ConfigError {
                message: format!("invalid config file: {e}"),
            })?;
        Ok(config)
    }

    /// Save to a JSON file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| TextitError::ConfigError {
                message: format!("cannot serialize config: {e}"),
            })?;
        std::fs::write(&path, content).map_err(|e| TextitError::ConfigError {
            message: format!("cannot write {}: {e}", path.as_ref().display()),
        })?;
        Ok(())
    }

    /// Check the configuration before building a client from it.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(TextitError::ConfigError {
                message: "base_url is required".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(TextitError::ConfigError {
                message: format!("base_url is not an HTTP(S) URL: {}", self.base_url),
            });
        }
        if self.timeout_ms == 0 {
            return Err(TextitError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Override the endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = ClientConfig::default().with_base_url("");
        assert!(matches!(
            config.validate().unwrap_err(),
            TextitError::ConfigError { .. }
        ));

        let config = ClientConfig::default().with_base_url("ftp://example.com");
        assert!(config.validate().is_err());

        let config = ClientConfig::default().with_timeout_ms(0);
        assert!(config.validate().is_err());
    }

    // Single test for every env-driven path, so the variable mutations
    // cannot race each other across the parallel test harness.
    #[test]
    fn test_from_env_round_trip() {
        std::env::set_var("TEXTIT_API_URL", "https://textit.example.com/api");
        std::env::set_var("TEXTIT_API_KEY", "secret");
        std::env::set_var("TEXTIT_TIMEOUT_MS", "5000");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://textit.example.com/api");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_ms, 5_000);

        // An empty key means no bearer token.
        std::env::set_var("TEXTIT_API_KEY", "");
        let config = ClientConfig::from_env().unwrap();
        assert!(config.api_key.is_none());

        // A non-numeric timeout is a configuration error, not a default.
        std::env::set_var("TEXTIT_TIMEOUT_MS", "soon");
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, TextitError::ConfigError { .. }));

        std::env::remove_var("TEXTIT_API_URL");
        std::env::remove_var("TEXTIT_API_KEY");
        std::env::remove_var("TEXTIT_TIMEOUT_MS");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ClientConfig::default()
            .with_api_key("secret")
            .with_timeout_ms(5_000);
        config.to_file(&path).unwrap();

        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded.base_url, config.base_url);
        assert_eq!(loaded.api_key.as_deref(), Some("secret"));
        assert_eq!(loaded.timeout_ms, 5_000);
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ClientConfig::from_file(&path).is_err());
    }
}
