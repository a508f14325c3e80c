//! Groq Whisper transcription adapter

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use tokio::fs;

use crate::application::ports::{SpeechTranscriber, TranscriptionError};
use crate::infrastructure::{GROQ_API_BASE_URL, REQUEST_TIMEOUT};

/// Default Whisper model for speech recognition
const DEFAULT_MODEL: &str = "whisper-large-v3";

/// Groq Whisper transcriber.
///
/// Uploads the recording as multipart form data and asks for a
/// plain-text transcript.
pub struct GroqWhisperTranscriber {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqWhisperTranscriber {
    /// Create a transcriber with the default Whisper model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GROQ_API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (for tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }
}

/// MIME type for the upload, from the file extension.
///
/// Unrecognized or missing extensions fall back to `audio/wav` rather
/// than relying on server-side sniffing of a mislabeled part.
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("ogg") | Some("oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "audio/wav",
    }
}

#[async_trait]
impl SpeechTranscriber for GroqWhisperTranscriber {
    async fn transcribe(&self, path: &Path) -> Result<String, TranscriptionError> {
        let audio = fs::read(path)
            .await
            .map_err(|e| TranscriptionError::AudioUnreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());

        let file_part = multipart::Part::bytes(audio)
            .file_name(file_name)
            .mime_str(mime_for(path))
            .map_err(|e| TranscriptionError::RequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, "Sending audio for transcription");

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscriptionError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let trimmed = transcript.trim();
        if trimmed.is_empty() {
            return Err(TranscriptionError::EmptyTranscript);
        }

        tracing::info!(chars = trimmed.len(), "Transcription completed");

        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_targets_transcriptions() {
        let transcriber = GroqWhisperTranscriber::new("test-key");
        assert_eq!(
            transcriber.api_url(),
            "https://api.groq.com/openai/v1/audio/transcriptions"
        );
    }

    #[test]
    fn base_url_override() {
        let transcriber =
            GroqWhisperTranscriber::new("test-key").with_base_url("http://localhost:9999");
        assert_eq!(
            transcriber.api_url(),
            "http://localhost:9999/audio/transcriptions"
        );
    }

    #[test]
    fn mime_follows_file_extension() {
        assert_eq!(mime_for(Path::new("note.mp3")), "audio/mpeg");
        assert_eq!(mime_for(Path::new("visit.M4A")), "audio/mp4");
        assert_eq!(mime_for(Path::new("intake.ogg")), "audio/ogg");
        assert_eq!(mime_for(Path::new("exam.flac")), "audio/flac");
        assert_eq!(mime_for(Path::new("note.wav")), "audio/wav");
    }

    #[test]
    fn unknown_extension_falls_back_to_wav() {
        assert_eq!(mime_for(Path::new("note.xyz")), "audio/wav");
        assert_eq!(mime_for(Path::new("recording")), "audio/wav");
    }

    #[tokio::test]
    async fn missing_audio_file_is_unreadable() {
        let transcriber = GroqWhisperTranscriber::new("test-key");
        let result = transcriber
            .transcribe(Path::new("/nonexistent/note.wav"))
            .await;

        assert!(matches!(
            result,
            Err(TranscriptionError::AudioUnreadable { .. })
        ));
    }
}
