//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the `IKIGAI`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ikigai_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod gemini;
mod retry;

pub use error::{ConfigError, ValidationError};
pub use gemini::GeminiConfig;
pub use retry::RetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini API configuration
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Retry policy configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `IKIGAI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `IKIGAI__GEMINI__API_KEY=...` -> `gemini.api_key = ...`
    /// - `IKIGAI__RETRY__MAX_ATTEMPTS=3` -> `retry.max_attempts = 3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("IKIGAI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// A missing API key is the fatal startup condition: it is reported here,
    /// before any submission can occur, and never treated as a per-request
    /// error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gemini.validate()?;
        self.retry.validate()?;
        Ok(())
    }
}
