//! LLM inference adapters

pub mod groq;

pub use groq::GroqInferenceClient;
