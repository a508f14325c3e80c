//! Speech transcription port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Failed to read audio file {path}: {message}")]
    AudioUnreadable { path: String, message: String },

    #[error("No intelligible speech recognized")]
    EmptyTranscript,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for converting a recorded audio file into text
#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    /// Transcribe the recording at `path` to text.
    ///
    /// # Returns
    /// The transcript or an error when recognition fails, the backend is
    /// unreachable, or the audio file is malformed
    async fn transcribe(&self, path: &Path) -> Result<String, TranscriptionError>;
}
