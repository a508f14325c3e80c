//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod image_encoder;
pub mod inference;
pub mod synthesizer;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use image_encoder::{EncodingError, ImageEncoder};
pub use inference::{InferenceClient, InferenceError};
pub use synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcriber::{SpeechTranscriber, TranscriptionError};
