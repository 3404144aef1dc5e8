//! Shared fixtures for conflict-check tests.

#![allow(dead_code)]

use snapguard_check::{
    Answer, CheckError, CheckResult, MemorySnapshotStore, SaveWorkflow, SnapshotStore, SyncProfile,
};
use snapguard_model::{LiveField, LiveRecord, SerializedField, SerializedRecord, SerializedVersion};
use snapguard_types::{FieldId, RecordId, REVISION};
use std::sync::Arc;

pub const TITLE: FieldId = FieldId::from_u128(0x1001);
pub const TEXT: FieldId = FieldId::from_u128(0x1002);
pub const SORT_ORDER: FieldId = FieldId::from_u128(0x1003);

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A live record with Title, Text and an audit Revision field.
pub fn live_record(raw_id: u128, name: &str) -> LiveRecord {
    LiveRecord::new(
        RecordId::from_u128(raw_id),
        "master",
        format!("/sitecore/content/{name}"),
        "en",
        1,
    )
    .with_field(LiveField::new(TITLE, "Title", "Hello"))
    .with_field(LiveField::new(TEXT, "Text", "<p>Body</p>"))
    .with_field(LiveField::new(REVISION, "__Revision", "9"))
}

/// A snapshot whose version fields equal the record's current values.
pub fn snapshot_of(record: &LiveRecord) -> SerializedRecord {
    let version = record.fields.iter().fold(
        SerializedVersion::new(record.version, record.language.clone()),
        |v, f| v.with_field(SerializedField::named(f.id, f.name.clone(), f.value.clone())),
    );
    SerializedRecord::new(record.id, record.database.clone()).with_version(version)
}

/// Replaces a version-specific serialized value.
pub fn set_serialized(snapshot: &mut SerializedRecord, field: FieldId, value: &str) {
    for version in &mut snapshot.versions {
        for f in &mut version.fields {
            if f.id == field {
                f.value = value.to_string();
            }
        }
    }
}

pub fn profile(name: &str, store: MemorySnapshotStore) -> SyncProfile {
    SyncProfile::new(name, Arc::new(store))
}

/// Snapshot store that always fails.
pub struct FailingStore;

impl SnapshotStore for FailingStore {
    fn get(&self, _id: RecordId, _database: &str) -> CheckResult<Option<SerializedRecord>> {
        Err(CheckError::Io(std::io::Error::other("disk unplugged")))
    }
}

/// Save workflow that records every hook call.
#[derive(Debug)]
pub struct RecordingWorkflow {
    pub post_back: bool,
    pub answer: Answer,
    pub prompts: Vec<String>,
    pub animation_disabled: bool,
    pub aborted: bool,
}

impl RecordingWorkflow {
    pub fn first_pass() -> Self {
        Self {
            post_back: false,
            answer: Answer::Undefined,
            prompts: Vec::new(),
            animation_disabled: false,
            aborted: false,
        }
    }

    pub fn resumed(answer: Answer) -> Self {
        Self {
            post_back: true,
            answer,
            ..Self::first_pass()
        }
    }
}

impl SaveWorkflow for RecordingWorkflow {
    fn is_post_back(&self) -> bool {
        self.post_back
    }

    fn answer(&self) -> Answer {
        self.answer
    }

    fn request_confirmation(&mut self, message: &str) {
        self.prompts.push(message.to_string());
    }

    fn disable_save_animation(&mut self) {
        self.animation_disabled = true;
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}
