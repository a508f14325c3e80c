//! Image encoding port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::consultation::EncodedImage;

/// Image encoding errors
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    #[error("Failed to read image file {path}: {message}")]
    Unreadable { path: String, message: String },
}

/// Port for turning an image file into its binary-to-text encoding
#[async_trait]
pub trait ImageEncoder: Send + Sync {
    /// Read the image at `path` and return its base64 encoding.
    ///
    /// # Returns
    /// The encoded image or an error when the file cannot be opened or read
    async fn encode(&self, path: &Path) -> Result<EncodedImage, EncodingError>;
}
