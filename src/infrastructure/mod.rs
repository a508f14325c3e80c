//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Groq API, the filesystem, and config storage.

pub mod config;
pub mod image;
pub mod inference;
pub mod synthesis;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use image::Base64FileEncoder;
pub use inference::GroqInferenceClient;
pub use synthesis::GroqSpeechSynthesizer;
pub use transcription::GroqWhisperTranscriber;

/// Groq OpenAI-compatible API base URL
pub const GROQ_API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Upper bound on any single remote call; both transcription and
/// inference perform blocking network I/O with no intrinsic limit.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);
