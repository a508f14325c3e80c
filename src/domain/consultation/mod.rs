//! Consultation domain types

pub mod diagnosis;
pub mod encoded_image;
pub mod prompt;
pub mod request_id;
pub mod submission;

pub use diagnosis::{AudioArtifact, Diagnosis, DiagnosisSource};
pub use encoded_image::EncodedImage;
pub use prompt::Prompt;
pub use request_id::RequestId;
pub use submission::UserSubmission;
