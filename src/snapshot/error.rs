//! Snapshot error types.

use thiserror::Error;

use crate::machine::MachineError;

/// Errors that can occur during snapshot operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot format version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot belongs to a differently named machine
    #[error("Snapshot belongs to machine '{found}', not '{expected}'")]
    MachineMismatch { expected: String, found: String },

    /// Restoring the captured configuration failed
    #[error(transparent)]
    Machine(#[from] MachineError),
}
