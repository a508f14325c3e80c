//! Filesystem-backed base64 image encoder

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{EncodingError, ImageEncoder};
use crate::domain::consultation::EncodedImage;

/// Encoder that reads an image file from disk and base64-encodes its bytes
#[derive(Debug, Clone, Default)]
pub struct Base64FileEncoder;

impl Base64FileEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageEncoder for Base64FileEncoder {
    async fn encode(&self, path: &Path) -> Result<EncodedImage, EncodingError> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| EncodingError::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(EncodedImage::from_bytes(&bytes))
    }
}
