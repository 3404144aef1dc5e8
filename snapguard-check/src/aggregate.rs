//! Aggregating desynchronizations across records and profiles.

use crate::error::CheckResult;
use crate::evaluate::evaluate;
use crate::profile::SyncProfile;
use snapguard_model::{FieldDesync, LiveRecord};
use snapguard_types::RecordId;
use tracing::debug;

/// Desynchronizations found for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordConflicts {
    pub id: RecordId,
    pub database: String,
    pub language: String,
    pub version: u32,
    pub display_name: String,
    pub desyncs: Vec<FieldDesync>,
}

impl RecordConflicts {
    fn matches(&self, record: &LiveRecord) -> bool {
        self.id == record.id
            && self.database == record.database
            && self.language == record.language
            && self.version == record.version
    }

    /// Names of the desynchronized fields, in report order.
    pub fn field_names(&self) -> Vec<&str> {
        self.desyncs.iter().map(FieldDesync::name).collect()
    }
}

/// Per-record desynchronizations of one check, in record order.
///
/// Only records with at least one desynchronization appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    entries: Vec<RecordConflicts>,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `desyncs` for `record`, merging with any earlier entry for the
    /// same record. Duplicates are dropped; first-seen order is kept.
    pub fn merge(&mut self, record: &LiveRecord, desyncs: Vec<FieldDesync>) {
        if desyncs.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|e| e.matches(record)) {
            Some(entry) => {
                for desync in desyncs {
                    if !entry.desyncs.contains(&desync) {
                        entry.desyncs.push(desync);
                    }
                }
            }
            None => {
                let mut unique = Vec::with_capacity(desyncs.len());
                for desync in desyncs {
                    if !unique.contains(&desync) {
                        unique.push(desync);
                    }
                }
                self.entries.push(RecordConflicts {
                    id: record.id,
                    database: record.database.clone(),
                    language: record.language.clone(),
                    version: record.version,
                    display_name: record.display_name.clone(),
                    desyncs: unique,
                });
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of flagged records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordConflicts> {
        self.entries.iter()
    }

    /// Desynchronizations of the first entry for `id`, if flagged.
    pub fn fields_for(&self, id: RecordId) -> Option<&[FieldDesync]> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.desyncs.as_slice())
    }
}

/// Runs every profile against every record.
#[derive(Debug, Clone, Default)]
pub struct ConflictAggregator {
    profiles: Vec<SyncProfile>,
}

impl ConflictAggregator {
    pub fn new(profiles: Vec<SyncProfile>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &[SyncProfile] {
        &self.profiles
    }

    /// Builds the conflict report. The first failure aborts the whole check.
    pub fn aggregate(&self, records: &[LiveRecord]) -> CheckResult<ConflictReport> {
        let mut report = ConflictReport::new();
        for record in records {
            for profile in &self.profiles {
                let desyncs = evaluate(record, profile)?;
                report.merge(record, desyncs);
            }
        }
        debug!(
            "Checked {} record(s) against {} profile(s): {} flagged",
            records.len(),
            self.profiles.len(),
            report.len()
        );
        Ok(report)
    }
}
