//! Speech synthesis adapters

pub mod groq_speech;

pub use groq_speech::GroqSpeechSynthesizer;
