//! Encoded image value object

/// Maximum number of encoded characters injected into a prompt.
/// Bounds the data excerpt regardless of image size.
pub const PREVIEW_CHARS: usize = 100;

/// Value object holding the base64 encoding of an attached image.
/// Created, used, and discarded within a single consultation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    payload: String,
}

impl EncodedImage {
    /// Encode raw image bytes as base64
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use base64::Engine;
        Self {
            payload: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Get the full encoded payload
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Get the bounded prefix of the payload that goes into the prompt.
    /// Always at most [`PREVIEW_CHARS`] characters; base64 is ASCII so
    /// slicing on a byte boundary is safe.
    pub fn preview_excerpt(&self) -> &str {
        &self.payload[..self.payload.len().min(PREVIEW_CHARS)]
    }
}
