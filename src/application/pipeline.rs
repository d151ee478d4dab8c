//! Analysis Pipeline - prompt, call, validate, retry.
//!
//! One invocation per submission. The pipeline is stateless between
//! invocations and never lets an error escape: the caller always gets an
//! [`AnalysisOutcome`].

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::analysis::{AnalysisFailure, AnalysisOutcome, AnalysisReport};
use crate::domain::questionnaire::AnswerSet;
use crate::ports::{GenerationRequest, ModelProvider, ProviderError};

use super::prompt::build_analysis_prompt;
use super::validate::{parse_reply, ParseOutcome, Violation};

/// Terminal message when the loop exhausts without a captured error.
pub const MAX_RETRY_MESSAGE: &str = "Maximum retry attempts reached. Please try again later.";

/// Bounded retry policy for the external call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts (1 initial + retries).
    pub max_attempts: u32,
    /// Backoff before retry n (1-indexed) is `base_delay * 2^(n-1)`. No jitter.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(2000),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay before the given retry (1-indexed).
    fn delay_before_retry(&self, retry: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(retry - 1)
    }
}

/// Failure of a single attempt. Every variant is retried identically:
/// transient transport trouble and a badly-shaped reply get the same
/// bounded-retry treatment.
#[derive(Debug, Clone, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("No JSON found in response")]
    NoJsonFound,

    #[error("Invalid JSON response from API")]
    InvalidJson(String),

    #[error("Invalid response structure")]
    InvalidStructure(Vec<Violation>),
}

/// The answer-submission-to-analysis pipeline.
pub struct AnalysisPipeline {
    provider: Arc<dyn ModelProvider>,
    policy: RetryPolicy,
}

impl AnalysisPipeline {
    /// Creates a pipeline with the default retry policy.
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self::with_policy(provider, RetryPolicy::default())
    }

    /// Creates a pipeline with an explicit retry policy.
    pub fn with_policy(provider: Arc<dyn ModelProvider>, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    /// Runs the full pipeline for one completed answer set.
    ///
    /// Returns the validated report on the first successful attempt, or an
    /// [`AnalysisFailure`] carrying the last attempt's error message once
    /// all attempts are spent. Never returns an `Err` and never panics.
    pub async fn analyze(&self, answers: &AnswerSet) -> AnalysisOutcome {
        let prompt = build_analysis_prompt(answers);
        let mut last_error: Option<AttemptError> = None;

        for attempt in 0..self.policy.max_attempts {
            if attempt > 0 {
                let delay = self.policy.delay_before_retry(attempt);
                debug!(
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "backing off before retry"
                );
                sleep(delay).await;
            }

            match self.run_attempt(&prompt).await {
                Ok(report) => {
                    debug!(attempt = attempt + 1, "analysis attempt succeeded");
                    return AnalysisOutcome::Report(report);
                }
                Err(error) => {
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = self.policy.max_attempts,
                        %error,
                        "analysis attempt failed"
                    );
                    last_error = Some(error);
                }
            }
        }

        let message = match last_error {
            Some(error) => error.to_string(),
            None => MAX_RETRY_MESSAGE.to_string(),
        };
        AnalysisOutcome::Failed(AnalysisFailure::new(message))
    }

    /// One full request/response/validate cycle.
    async fn run_attempt(&self, prompt: &str) -> Result<AnalysisReport, AttemptError> {
        let response = self
            .provider
            .generate(GenerationRequest::new(prompt))
            .await?;

        match parse_reply(&response.text) {
            ParseOutcome::Parsed(report) => Ok(report),
            ParseOutcome::ExtractionFailed => Err(AttemptError::NoJsonFound),
            ParseOutcome::ParseFailed(detail) => Err(AttemptError::InvalidJson(detail)),
            ParseOutcome::ValidationFailed(violations) => {
                Err(AttemptError::InvalidStructure(violations))
            }
        }
    }
}
