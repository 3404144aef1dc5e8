//! Locating the serialized version that matches a live record.

use snapguard_model::{SerializedRecord, SerializedVersion};

/// Finds the version entry for (`number`, `language`). First match wins.
///
/// `None` means the record gained this version after the last export; the
/// caller reports it as a desynchronization.
pub fn resolve_version<'a>(
    record: &'a SerializedRecord,
    number: u32,
    language: &str,
) -> Option<&'a SerializedVersion> {
    record
        .versions
        .iter()
        .find(|v| v.number == number && v.language == language)
}
