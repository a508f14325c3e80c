//! Prompt value object

use super::encoded_image::{EncodedImage, PREVIEW_CHARS};

/// Fixed system instruction framing the model as a clinical assistant
const SYSTEM_INSTRUCTION: &str =
    "You are a certified medical assistant. Analyze symptoms and medical images with clinical accuracy.";

/// Value object representing the complete system/user message pair sent
/// to the LLM. Built fresh per request; never cached or merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    user_content: String,
}

impl Prompt {
    /// Build a prompt from the resolved user text and an optional
    /// attached image. Pure and deterministic.
    pub fn build(user_text: &str, image: Option<&EncodedImage>) -> Self {
        let user_content = match image {
            Some(image) => format!(
                "{}\n\n[Attached medical image (base64, first {} chars)]: {}...",
                user_text,
                PREVIEW_CHARS,
                image.preview_excerpt()
            ),
            None => user_text.to_string(),
        };
        Self { user_content }
    }

    /// Get the system-role instruction
    pub fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    /// Get the user-role content
    pub fn user_content(&self) -> &str {
        &self.user_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_is_clinical() {
        let prompt = Prompt::build("headache", None);
        assert!(prompt.system_instruction().contains("medical assistant"));
    }

    #[test]
    fn without_image_content_is_text_only() {
        let prompt = Prompt::build("fever and cough", None);
        assert_eq!(prompt.user_content(), "fever and cough");
    }

    #[test]
    fn with_image_content_carries_excerpt() {
        let image = EncodedImage::from_bytes(&[1, 2, 3, 4]);
        let prompt = Prompt::build("rash on arm", Some(&image));

        assert!(prompt.user_content().starts_with("rash on arm"));
        assert!(prompt.user_content().contains("[Attached medical image"));
        assert!(prompt.user_content().contains(image.preview_excerpt()));
    }

    #[test]
    fn build_is_pure() {
        let image = EncodedImage::from_bytes(&[5u8; 512]);
        let a = Prompt::build("chest pain", Some(&image));
        let b = Prompt::build("chest pain", Some(&image));
        assert_eq!(a, b);
        assert_eq!(a.user_content(), b.user_content());
    }

    #[test]
    fn image_note_is_bounded_for_any_image() {
        let large = EncodedImage::from_bytes(&vec![9u8; 1024 * 1024]);
        let prompt = Prompt::build("x", Some(&large));
        // text + fixed annotation + bounded excerpt
        assert!(prompt.user_content().len() < 300);
    }
}
