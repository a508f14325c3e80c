//! Speech synthesis port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::consultation::AudioArtifact;

/// Speech synthesis errors
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to write audio file {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Port for converting response text into a spoken audio file
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` as speech and write it to `target`.
    ///
    /// # Returns
    /// The written artifact or an error when the engine is unavailable
    /// or rejects the input text
    async fn synthesize(&self, text: &str, target: &Path) -> Result<AudioArtifact, SynthesisError>;
}
