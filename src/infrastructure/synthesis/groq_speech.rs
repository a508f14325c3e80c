//! Groq PlayAI speech synthesis adapter

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;
use tokio::fs;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::config::DEFAULT_VOICE;
use crate::domain::consultation::AudioArtifact;
use crate::infrastructure::{GROQ_API_BASE_URL, REQUEST_TIMEOUT};

/// Default synthesis model
const DEFAULT_MODEL: &str = "playai-tts";

#[derive(Debug, Serialize)]
struct SpeechRequest {
    model: String,
    voice: String,
    input: String,
    response_format: String,
}

/// Groq text-to-speech synthesizer.
///
/// Requests MP3 audio for the given text and writes the bytes to the
/// caller-chosen target path.
pub struct GroqSpeechSynthesizer {
    api_key: String,
    model: String,
    voice: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqSpeechSynthesizer {
    /// Create a synthesizer with the default voice
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_voice(api_key, DEFAULT_VOICE)
    }

    /// Create a synthesizer with a custom voice
    pub fn with_voice(api_key: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            voice: voice.into(),
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
        format!("{}/audio/speech", self.base_url)
    }

    fn build_request(&self, text: &str) -> SpeechRequest {
        SpeechRequest {
            model: self.model.clone(),
            voice: self.voice.clone(),
            input: text.to_string(),
            response_format: "mp3".to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GroqSpeechSynthesizer {
    async fn synthesize(&self, text: &str, target: &Path) -> Result<AudioArtifact, SynthesisError> {
        let body = self.build_request(text);

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SynthesisError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SynthesisError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SynthesisError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        fs::write(target, &audio)
            .await
            .map_err(|e| SynthesisError::WriteFailed {
                path: target.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(bytes = audio.len(), path = %target.display(), "Speech synthesized");

        Ok(AudioArtifact::new(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_targets_speech() {
        let synthesizer = GroqSpeechSynthesizer::new("test-key");
        assert_eq!(
            synthesizer.api_url(),
            "https://api.groq.com/openai/v1/audio/speech"
        );
    }

    #[test]
    fn build_request_uses_voice_and_mp3() {
        let synthesizer = GroqSpeechSynthesizer::with_voice("key", "Celeste-PlayAI");
        let request = synthesizer.build_request("Likely viral infection");

        assert_eq!(request.model, "playai-tts");
        assert_eq!(request.voice, "Celeste-PlayAI");
        assert_eq!(request.input, "Likely viral infection");
        assert_eq!(request.response_format, "mp3");
    }

    #[test]
    fn default_voice() {
        let synthesizer = GroqSpeechSynthesizer::new("key");
        let request = synthesizer.build_request("x");
        assert_eq!(request.voice, DEFAULT_VOICE);
    }
}
