//! Per-request identifier

use std::fmt;

use uuid::Uuid;

/// Unique identifier allocated per submission. Used to derive
/// collision-free artifact file names so concurrent consultations
/// never race on a shared output path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Allocate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// File name for this request's synthesized audio artifact
    pub fn artifact_file_name(&self) -> String {
        format!("consultation-{}.mp3", self.0)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
