//! Record model for snapguard.
//!
//! Defines the read-only views the conflict check works on:
//! - [`LiveRecord`] / [`LiveField`] — the record about to be saved
//! - [`SerializedRecord`] / [`SerializedVersion`] / [`SerializedField`] — the
//!   last externalized snapshot of that record
//! - [`FieldDesync`] — one detected mismatch between the two
//!
//! Every type is built fresh for a single check and never persisted by the
//! check itself. All of them are `serde` types so collaborators can load
//! snapshots from whatever format they keep them in.

mod desync;
mod live;
mod serialized;

pub use desync::FieldDesync;
pub use live::{FieldType, LiveField, LiveRecord};
pub use serialized::{SerializedField, SerializedRecord, SerializedVersion};
