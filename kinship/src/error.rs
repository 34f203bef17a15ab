//! Error types for registry and query operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinshipError {
    #[error("member not found: {0}")]
    NotFound(String),

    /// Parent links starting at `start` came back around to `repeated`.
    #[error("cycle detected in ancestry of {start}: {repeated} visited twice")]
    CycleDetected { start: String, repeated: String },

    #[error("member name must not be empty")]
    EmptyName,

    #[error("unknown gender: {0:?} (expected male or female)")]
    UnknownGender(String),

    #[error("degree table has two entries for ({0}, {1})")]
    DuplicateEntry(u32, u32),

    #[error("degree table has no entry for ({0}, {1})")]
    MissingEntry(u32, u32),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u8),
}

pub type Result<T> = std::result::Result<T, KinshipError>;
