//! Gemini provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// Gemini API key. Required: its absence is a fatal startup condition,
    /// surfaced before any submission can occur.
    pub api_key: Option<String>,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Returns the configured API key, failing if absent.
    pub fn require_api_key(&self) -> Result<&str, ValidationError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ValidationError::MissingRequired("IKIGAI__GEMINI__API_KEY"))
    }

    /// Validate Gemini configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.require_api_key()?;

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }

        Ok(())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = GeminiConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.has_api_key());
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let config = GeminiConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("IKIGAI__GEMINI__API_KEY"))
        );
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = GeminiConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn configured_key_passes_validation() {
        let config = GeminiConfig {
            api_key: Some("AIza-test".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.require_api_key(), Ok("AIza-test"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = GeminiConfig {
            api_key: Some("AIza-test".to_string()),
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn timeout_converts_to_duration() {
        let config = GeminiConfig {
            timeout_secs: 90,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(90));
    }
}
