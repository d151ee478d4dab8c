//! Ports - interfaces the application core depends on.

mod model_provider;

pub use model_provider::{
    GenerationRequest, GenerationResponse, ModelProvider, ProviderError, ProviderInfo,
};
