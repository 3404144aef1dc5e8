//! Core type definitions for snapguard.
//!
//! This crate defines the identifiers shared by the live model, the
//! serialized model, and the conflict check:
//! - Record and field identifiers (UUID backed, GUID compatible)
//! - The well-known built-in field IDs that are never compared

mod builtin;
mod ids;

pub use builtin::{is_builtin_audit_field, BUILTIN_AUDIT_FIELDS, REVISION, UPDATED, UPDATED_BY};
pub use ids::{FieldId, RecordId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
