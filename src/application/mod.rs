//! Application layer - the answer-submission-to-analysis pipeline.

mod extract;
mod pipeline;
mod prompt;
mod validate;

pub use extract::{extract_json, ExtractError};
pub use pipeline::{AnalysisPipeline, AttemptError, RetryPolicy, MAX_RETRY_MESSAGE};
pub use prompt::build_analysis_prompt;
pub use validate::{parse_reply, validate, ParseOutcome, Violation};
