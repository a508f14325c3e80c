//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod consultation;
pub mod error;

// Re-export common types
pub use config::AppConfig;
pub use consultation::{
    AudioArtifact, Diagnosis, DiagnosisSource, EncodedImage, Prompt, RequestId, UserSubmission,
};
pub use error::*;
