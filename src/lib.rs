//! Medivox - clinical AI assistant with vision and voice
//!
//! This crate takes a clinical query as free text, an optional medical image,
//! and/or an optional voice recording, asks a remote LLM for a
//! diagnostic-style response, and synthesizes that response as spoken audio.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (submission, prompt, diagnosis) and errors
//! - **Application**: The consultation use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Groq API, filesystem, config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
