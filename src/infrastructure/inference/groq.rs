//! Groq chat-completions inference adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{InferenceClient, InferenceError};
use crate::domain::config::DEFAULT_MODEL;
use crate::domain::consultation::Prompt;
use crate::infrastructure::{GROQ_API_BASE_URL, REQUEST_TIMEOUT};

/// Low-variance sampling appropriate for clinical-style output
const TEMPERATURE: f32 = 0.3;

/// Maximum generated response length
const MAX_TOKENS: u32 = 1024;

// Request types for the chat completions API

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

// Response types for the chat completions API

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Groq chat-completions client.
///
/// Holds one long-lived `reqwest::Client`; safe to share across
/// concurrent consultations.
pub struct GroqInferenceClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqInferenceClient {
    /// Create a client with the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a client with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
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
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, prompt: &Prompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system_instruction().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user_content().to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    fn extract_text(response: &ChatCompletionResponse) -> Option<String> {
        response
            .choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .clone()
    }
}

#[async_trait]
impl InferenceClient for GroqInferenceClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, InferenceError> {
        let url = self.api_url();
        let body = self.build_request(prompt);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(InferenceError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(InferenceError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InferenceError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::ParseError(e.to_string()))?;

        if let Some(error) = response.error {
            return Err(InferenceError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(InferenceError::EmptyResponse)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InferenceError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_has_correct_structure() {
        let client = GroqInferenceClient::new("test-key");
        let prompt = Prompt::build("fever and cough", None);

        let request = client.build_request(&prompt);

        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "fever and cough");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, 1024);
    }

    #[test]
    fn api_url_targets_chat_completions() {
        let client = GroqInferenceClient::new("test-key");
        assert_eq!(
            client.api_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn custom_model_and_base_url() {
        let client = GroqInferenceClient::with_model("key", "mixtral-8x7b-32768")
            .with_base_url("http://localhost:9999");
        assert_eq!(client.api_url(), "http://localhost:9999/chat/completions");

        let request = client.build_request(&Prompt::build("x", None));
        assert_eq!(request.model, "mixtral-8x7b-32768");
    }

    #[test]
    fn extract_text_from_response() {
        let response = ChatCompletionResponse {
            choices: Some(vec![Choice {
                message: Some(ResponseMessage {
                    content: Some("Likely viral infection".to_string()),
                }),
            }]),
            error: None,
        };

        let text = GroqInferenceClient::extract_text(&response);
        assert_eq!(text, Some("Likely viral infection".to_string()));
    }

    #[test]
    fn extract_text_empty_response() {
        let response = ChatCompletionResponse {
            choices: None,
            error: None,
        };

        assert!(GroqInferenceClient::extract_text(&response).is_none());
    }
}
