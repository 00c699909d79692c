//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The captured stack is deeper than the state set allows
    #[error("Checkpoint stack depth {depth} exceeds capacity {capacity}")]
    StackTooDeep { depth: usize, capacity: usize },

    /// The captured stack holds a state outside the declared set
    #[error("Checkpoint holds undeclared state '{state}' (index {index})")]
    UnknownState { state: String, index: usize },
}
