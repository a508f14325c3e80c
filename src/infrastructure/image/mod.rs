//! Image encoding adapters

pub mod base64_file;

pub use base64_file::Base64FileEncoder;
