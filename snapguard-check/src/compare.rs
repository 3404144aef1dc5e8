//! Per-field comparison.

use crate::profile::FieldFilter;
use snapguard_model::LiveField;

/// Outcome of comparing one live field with its serialized counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
    /// The field is not compared at all.
    Skip,
}

/// Compares a live field against its serialized value, if any.
///
/// Built-in audit fields and attachments are skipped before the profile's
/// filter is consulted. A field with no serialized counterpart is skipped,
/// not reported. Values are compared byte for byte.
pub fn compare(field: &LiveField, serialized: Option<&str>, filter: &dyn FieldFilter) -> Verdict {
    if field.is_builtin() || field.is_attachment() || !filter.includes(field.id) {
        return Verdict::Skip;
    }

    match serialized {
        None => Verdict::Skip,
        Some(value) if value == field.value => Verdict::Match,
        Some(_) => Verdict::Mismatch,
    }
}
