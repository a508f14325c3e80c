//! LLM inference port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::consultation::Prompt;

/// Inference errors
#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty model response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for remote LLM text generation.
///
/// Implementations must be safe for concurrent use: one client handle is
/// shared read-only across all in-flight consultations.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Send the prompt to the model and return the first generated
    /// message text.
    async fn generate(&self, prompt: &Prompt) -> Result<String, InferenceError>;
}
