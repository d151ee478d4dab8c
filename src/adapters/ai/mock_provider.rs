//! Mock model provider for testing.
//!
//! Configurable implementation of the ModelProvider port, so pipeline tests
//! run without calling the real Gemini API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockModelProvider::new()
//!     .with_reply(r#"{"scores": ...}"#)
//!     .with_failure(MockFailure::Unavailable { message: "down".into() });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    GenerationRequest, GenerationResponse, ModelProvider, ProviderError, ProviderInfo,
};

/// Mock model provider for testing.
///
/// Replies are consumed in configuration order; once exhausted, a default
/// reply is returned. Every call is recorded for verification.
#[derive(Debug, Clone, Default)]
pub struct MockModelProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(MockFailure),
}

/// Failure modes injectable into the mock.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate a safety block.
    Blocked { reason: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockFailure> for ProviderError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::RateLimited { retry_after_secs } => {
                ProviderError::rate_limited(retry_after_secs)
            }
            MockFailure::Unavailable { message } => ProviderError::unavailable(message),
            MockFailure::AuthenticationFailed => ProviderError::AuthenticationFailed,
            MockFailure::Network { message } => ProviderError::network(message),
            MockFailure::Blocked { reason } => ProviderError::blocked(reason),
            MockFailure::Timeout { timeout_secs } => ProviderError::Timeout { timeout_secs },
        }
    }
}

impl MockModelProvider {
    /// Creates a mock with no configured replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful text reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(failure));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded requests, in call order.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Text("Mock reply".to_string()))
    }
}

#[async_trait]
impl ModelProvider for MockModelProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ProviderError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Text(text) => Ok(GenerationResponse {
                text,
                model: "mock-model-1".to_string(),
            }),
            MockReply::Failure(failure) => Err(failure.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new("prompt")
    }

    #[tokio::test]
    async fn returns_replies_in_order() {
        let provider = MockModelProvider::new()
            .with_reply("first")
            .with_reply("second");

        assert_eq!(provider.generate(request()).await.unwrap().text, "first");
        assert_eq!(provider.generate(request()).await.unwrap().text, "second");
    }

    #[tokio::test]
    async fn returns_default_after_exhaustion() {
        let provider = MockModelProvider::new().with_reply("only");

        provider.generate(request()).await.unwrap();
        let reply = provider.generate(request()).await.unwrap();
        assert_eq!(reply.text, "Mock reply");
    }

    #[tokio::test]
    async fn injected_failure_is_returned() {
        let provider = MockModelProvider::new().with_failure(MockFailure::RateLimited {
            retry_after_secs: 30,
        });

        let err = provider.generate(request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn records_every_call() {
        let provider = MockModelProvider::new();
        assert_eq!(provider.call_count(), 0);

        provider.generate(GenerationRequest::new("a")).await.unwrap();
        provider.generate(GenerationRequest::new("b")).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.calls()[1].prompt, "b");
    }

    #[tokio::test(start_paused = true)]
    async fn respects_configured_delay() {
        let provider = MockModelProvider::new()
            .with_reply("slow")
            .with_delay(Duration::from_millis(50));

        let start = tokio::time::Instant::now();
        provider.generate(request()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
