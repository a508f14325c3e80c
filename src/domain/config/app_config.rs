//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default chat model for diagnosis generation
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Default voice for speech synthesis
pub const DEFAULT_VOICE: &str = "Fritz-PlayAI";

/// Default directory for synthesized audio artifacts
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
    pub output_dir: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            voice: Some(DEFAULT_VOICE.to_string()),
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            voice: other.voice.or(self.voice),
            output_dir: other.output_dir.or(self.output_dir),
        }
    }

    /// Get the chat model, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the synthesis voice, or the default if not set
    pub fn voice_or_default(&self) -> &str {
        self.voice.as_deref().unwrap_or(DEFAULT_VOICE)
    }

    /// Get the artifact output directory, or the default if not set
    pub fn output_dir_or_default(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }
}
