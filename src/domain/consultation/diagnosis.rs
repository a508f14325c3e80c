//! Diagnosis and audio artifact value objects

use std::path::{Path, PathBuf};

/// Where the diagnosis text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisSource {
    /// Generated by the model
    Model,
    /// Inference failed; the text is a readable failure message
    InferenceFailure,
}

/// The textual response returned to the user. Either the model's answer
/// or, when inference failed, a readable failure message that is still
/// synthesized as speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    text: String,
    source: DiagnosisSource,
}

impl Diagnosis {
    /// Wrap a model-generated response
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: DiagnosisSource::Model,
        }
    }

    /// Build a speakable diagnosis from an inference failure
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            source: DiagnosisSource::InferenceFailure,
        }
    }

    /// Get the response text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the source tag
    pub fn source(&self) -> DiagnosisSource {
        self.source
    }

    /// Whether this is a degraded (inference-failure) response
    pub fn is_degraded(&self) -> bool {
        self.source == DiagnosisSource::InferenceFailure
    }
}

/// A synthesized speech file produced as pipeline output.
/// The file persists on disk after the consultation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    path: PathBuf,
}

impl AudioArtifact {
    /// Create an artifact handle for a written file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the artifact file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
