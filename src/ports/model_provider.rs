//! Model Provider Port - Interface to the external generative-model service.
//!
//! The analysis pipeline treats the model as an opaque text-in/text-out
//! oracle; implementations translate between a provider-specific API (Gemini
//! in production, an in-memory mock in tests) and this contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for generative model calls.
///
/// One logical call per attempt; retries are owned by the caller, not the
/// provider.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Sends a single prompt and returns the model's free-form text reply.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ProviderError>;

    /// Provider identification (name and model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for one generation attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// The full prompt, as a single text block.
    pub prompt: String,
    /// Temperature for response randomness, if the provider supports it.
    pub temperature: Option<f32>,
    /// Cap on generated tokens, if the provider supports it.
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Creates a request with the given prompt and provider defaults.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the output token cap.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

/// The model's reply to one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    /// Raw reply text; expected (but not guaranteed) to contain one JSON object.
    pub text: String,
    /// Model that produced the reply.
    pub model: String,
}

/// Provider identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini", "mock").
    pub name: String,
    /// Model identifier (e.g., "gemini-2.0-flash").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Provider call errors.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable (5xx-equivalent).
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Reply arrived but the provider envelope could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider rejected the request itself.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The reply was withheld (safety filter, empty candidate list).
    #[error("response blocked: {reason}")]
    Blocked {
        /// Reason reported by the provider.
        reason: String,
    },

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl ProviderError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a blocked error.
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::Blocked {
            reason: reason.into(),
        }
    }

    /// Returns true if this error is plausibly transient.
    ///
    /// The analysis pipeline retries every attempt failure regardless of
    /// classification; this exists for callers that want to distinguish
    /// transport trouble from a rejected request.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::RateLimited { .. }
                | ProviderError::Unavailable { .. }
                | ProviderError::Network(_)
                | ProviderError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_builder_works() {
        let request = GenerationRequest::new("analyze this")
            .with_temperature(0.7)
            .with_max_output_tokens(2048);

        assert_eq!(request.prompt, "analyze this");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_output_tokens, Some(2048));
    }

    #[test]
    fn provider_error_retryable_classification() {
        assert!(ProviderError::rate_limited(30).is_retryable());
        assert!(ProviderError::unavailable("down").is_retryable());
        assert!(ProviderError::network("reset").is_retryable());
        assert!(ProviderError::Timeout { timeout_secs: 60 }.is_retryable());

        assert!(!ProviderError::AuthenticationFailed.is_retryable());
        assert!(!ProviderError::parse("bad envelope").is_retryable());
        assert!(!ProviderError::blocked("safety").is_retryable());
        assert!(!ProviderError::InvalidRequest("bad body".to_string()).is_retryable());
    }

    #[test]
    fn provider_error_displays_correctly() {
        assert_eq!(
            ProviderError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            ProviderError::blocked("SAFETY").to_string(),
            "response blocked: SAFETY"
        );
        assert_eq!(
            ProviderError::Timeout { timeout_secs: 60 }.to_string(),
            "request timed out after 60s"
        );
    }
}
