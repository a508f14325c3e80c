//! Speech transcription adapters

pub mod whisper;

pub use whisper::GroqWhisperTranscriber;
