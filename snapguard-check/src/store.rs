//! Snapshot and live-record stores.
//!
//! The check only reads through these traits. [`MemorySnapshotStore`] and
//! [`MemoryLiveStore`] hold fixed data; [`FsSnapshotStore`] reads JSON
//! snapshots laid out as `<root>/<database>/<record id>.json`.

use crate::error::{CheckError, CheckResult};
use crate::guard::SaveTarget;
use snapguard_model::{LiveRecord, SerializedRecord};
use snapguard_types::RecordId;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read access to the serialized snapshots of one profile.
pub trait SnapshotStore: Send + Sync {
    /// Returns the snapshot for `id` in `database`, or `None` if it was
    /// never serialized.
    fn get(&self, id: RecordId, database: &str) -> CheckResult<Option<SerializedRecord>>;
}

/// Read access to the live records being saved.
pub trait LiveRecordStore: Send + Sync {
    /// Returns `None` only if the record disappeared.
    fn get(&self, target: &SaveTarget) -> CheckResult<Option<LiveRecord>>;
}

/// In-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    records: HashMap<(RecordId, String), SerializedRecord>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: SerializedRecord) {
        self.records.insert((record.id, record.database.clone()), record);
    }

    pub fn with(mut self, record: SerializedRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn get(&self, id: RecordId, database: &str) -> CheckResult<Option<SerializedRecord>> {
        Ok(self.records.get(&(id, database.to_string())).cloned())
    }
}

/// Snapshot store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    root: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the snapshot file for `id` in `database`.
    ///
    /// The database name must be a single plain path component.
    pub fn snapshot_path(&self, id: RecordId, database: &str) -> CheckResult<PathBuf> {
        if database.is_empty()
            || database == "."
            || database.contains("..")
            || database.contains(['/', '\\'])
        {
            return Err(CheckError::InvalidDatabase(database.to_string()));
        }
        Ok(self
            .root
            .join(database)
            .join(format!("{}.json", id.as_uuid().hyphenated())))
    }

    /// Writes a snapshot, replacing any existing one.
    pub fn write(&self, record: &SerializedRecord) -> CheckResult<()> {
        let path = self.snapshot_path(record.id, &record.database)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, json)?;
        debug!("Wrote snapshot {}", path.display());
        Ok(())
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn get(&self, id: RecordId, database: &str) -> CheckResult<Option<SerializedRecord>> {
        let path = self.snapshot_path(id, database)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: SerializedRecord =
            serde_json::from_slice(&bytes).map_err(|e| CheckError::CorruptSnapshot {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if record.id != id || record.database != database {
            return Err(CheckError::CorruptSnapshot {
                path: path.display().to_string(),
                reason: format!(
                    "file holds {} in '{}', expected {} in '{}'",
                    record.id, record.database, id, database
                ),
            });
        }

        Ok(Some(record))
    }
}

/// In-memory live-record store keyed by (id, database, language, version).
#[derive(Debug, Clone, Default)]
pub struct MemoryLiveStore {
    records: HashMap<SaveTarget, LiveRecord>,
}

impl MemoryLiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: LiveRecord) {
        self.records.insert(SaveTarget::of(&record), record);
    }

    pub fn with(mut self, record: LiveRecord) -> Self {
        self.insert(record);
        self
    }
}

impl LiveRecordStore for MemoryLiveStore {
    fn get(&self, target: &SaveTarget) -> CheckResult<Option<LiveRecord>> {
        Ok(self.records.get(target).cloned())
    }
}
