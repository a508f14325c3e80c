//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod consult;
pub mod ports;

// Re-export the use case
pub use consult::{ConsultError, ConsultationOutput, ConsultationStage, ConsultationUseCase};
