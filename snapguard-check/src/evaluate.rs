//! Evaluating one record against one profile.

use crate::compare::{compare, Verdict};
use crate::error::{CheckError, CheckResult};
use crate::profile::SyncProfile;
use crate::version::resolve_version;
use snapguard_model::{FieldDesync, LiveRecord, SerializedRecord, SerializedVersion};
use snapguard_types::FieldId;
use std::collections::HashMap;
use tracing::{debug, info};

/// Serialized field values of one snapshot version, keyed by field ID.
///
/// Version-specific values shadow shared ones.
struct FieldIndex<'a> {
    versioned: HashMap<FieldId, &'a str>,
    shared: HashMap<FieldId, &'a str>,
}

impl<'a> FieldIndex<'a> {
    fn new(version: &'a SerializedVersion, snapshot: &'a SerializedRecord) -> Self {
        Self {
            versioned: version.fields.iter().map(|f| (f.id, f.value.as_str())).collect(),
            shared: snapshot.shared_fields.iter().map(|f| (f.id, f.value.as_str())).collect(),
        }
    }

    fn get(&self, id: FieldId) -> Option<&'a str> {
        self.versioned.get(&id).or_else(|| self.shared.get(&id)).copied()
    }
}

/// Computes the desynchronized fields of `record` under `profile`.
///
/// Returns an empty list when the profile does not manage the record or has
/// no snapshot of it, and `[Version]` when the snapshot lacks the record's
/// version. Otherwise the list follows the record's field order.
pub fn evaluate(record: &LiveRecord, profile: &SyncProfile) -> CheckResult<Vec<FieldDesync>> {
    if !profile.scope().includes(record) {
        debug!("Profile '{}' does not manage {}", profile.name(), record.id);
        return Ok(Vec::new());
    }

    let snapshot = profile
        .store()
        .get(record.id, &record.database)
        .map_err(|source| CheckError::Profile {
            profile: profile.name().to_string(),
            source: Box::new(source),
        })?;
    let Some(snapshot) = snapshot else {
        debug!("Profile '{}' has no snapshot of {}", profile.name(), record.id);
        return Ok(Vec::new());
    };

    let Some(version) = resolve_version(&snapshot, record.version, &record.language) else {
        info!(
            "Profile '{}' has no serialized version {} ({}) of {}",
            profile.name(),
            record.version,
            record.language,
            record.id
        );
        return Ok(vec![FieldDesync::Version]);
    };

    let index = FieldIndex::new(version, &snapshot);
    let desyncs: Vec<FieldDesync> = record
        .fields
        .iter()
        .filter(|field| compare(field, index.get(field.id), profile.fields()) == Verdict::Mismatch)
        .map(|field| FieldDesync::field(field.name.as_str()))
        .collect();

    if !desyncs.is_empty() {
        info!(
            "Profile '{}' found {} desynchronized field(s) on {}",
            profile.name(),
            desyncs.len(),
            record.id
        );
    }
    Ok(desyncs)
}
