//! Error types for the conflict check.

use snapguard_types::RecordId;
use thiserror::Error;

/// Result type for conflict-check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors that can occur while checking for conflicts.
///
/// None of these reach the save workflow directly: the save guard turns
/// every one of them into a block message.
#[derive(Debug, Error)]
pub enum CheckError {
    /// I/O error reading a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A snapshot exists but cannot be used.
    #[error("corrupt snapshot {path}: {reason}")]
    CorruptSnapshot { path: String, reason: String },

    /// A database name that cannot be used as a snapshot directory.
    #[error("invalid database name '{0}'")]
    InvalidDatabase(String),

    /// A failure raised while evaluating one profile.
    #[error("profile '{profile}': {source}")]
    Profile {
        profile: String,
        #[source]
        source: Box<CheckError>,
    },

    /// The live store no longer has a record that is being saved.
    #[error("record {id} ({language}, version {version}) vanished during save")]
    RecordVanished {
        id: RecordId,
        language: String,
        version: u32,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
