//! User submission value object

use std::path::PathBuf;

/// One user-initiated submission: free-text query plus optional
/// image and voice-recording attachments. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct UserSubmission {
    /// Typed query text, if any
    pub text: Option<String>,
    /// Path to an attached medical image, if any
    pub image_reference: Option<PathBuf>,
    /// Path to an attached voice recording, if any
    pub audio_reference: Option<PathBuf>,
}

impl UserSubmission {
    /// Create a submission from the three optional inputs
    pub fn new(
        text: Option<String>,
        image_reference: Option<PathBuf>,
        audio_reference: Option<PathBuf>,
    ) -> Self {
        Self {
            text,
            image_reference,
            audio_reference,
        }
    }

    /// Create a text-only submission
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Whether the submission carries neither text nor a recording.
    /// An image alone is not a usable query.
    pub fn is_empty(&self) -> bool {
        self.audio_reference.is_none()
            && self
                .text
                .as_deref()
                .map(|t| t.trim().is_empty())
                .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(UserSubmission::default().is_empty());
    }

    #[test]
    fn whitespace_text_is_empty() {
        let submission = UserSubmission::from_text("   ");
        assert!(submission.is_empty());
    }

    #[test]
    fn text_makes_it_non_empty() {
        let submission = UserSubmission::from_text("fever and cough");
        assert!(!submission.is_empty());
    }

    #[test]
    fn audio_makes_it_non_empty() {
        let submission = UserSubmission {
            audio_reference: Some(PathBuf::from("note.wav")),
            ..Default::default()
        };
        assert!(!submission.is_empty());
    }

    #[test]
    fn image_alone_is_still_empty() {
        let submission = UserSubmission {
            image_reference: Some(PathBuf::from("scan.png")),
            ..Default::default()
        };
        assert!(submission.is_empty());
    }
}
