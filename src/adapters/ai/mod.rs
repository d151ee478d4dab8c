//! AI adapters - ModelProvider implementations.

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiProvider, GeminiSettings};
pub use mock_provider::{MockFailure, MockModelProvider};
