mod common;

use common::*;
use pretty_assertions::assert_eq;
use snapguard_check::{
    CheckError, FsSnapshotStore, LiveRecordStore, MemoryLiveStore, MemorySnapshotStore, SaveTarget,
    SnapshotStore,
};
use snapguard_types::RecordId;

// ── MemorySnapshotStore ──────────────────────────────────────────

#[test]
fn memory_store_keys_on_id_and_database() {
    let record = live_record(1, "Home");
    let store = MemorySnapshotStore::new().with(snapshot_of(&record));

    assert_eq!(store.len(), 1);
    assert!(store.get(record.id, "master").unwrap().is_some());
    assert!(store.get(record.id, "web").unwrap().is_none());
    assert!(store.get(RecordId::from_u128(99), "master").unwrap().is_none());
}

#[test]
fn memory_store_insert_replaces() {
    let record = live_record(1, "Home");
    let mut store = MemorySnapshotStore::new();
    store.insert(snapshot_of(&record));
    let mut changed = snapshot_of(&record);
    set_serialized(&mut changed, TITLE, "Hi");
    store.insert(changed.clone());

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(record.id, "master").unwrap(), Some(changed));
}

// ── FsSnapshotStore ──────────────────────────────────────────────

#[test]
fn fs_store_roundtrips_written_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path());
    let snapshot = snapshot_of(&live_record(1, "Home"));

    store.write(&snapshot).unwrap();
    assert!(store.snapshot_path(snapshot.id, "master").unwrap().exists());
    assert_eq!(store.get(snapshot.id, "master").unwrap(), Some(snapshot));
}

#[test]
fn fs_store_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path());
    assert!(store.get(RecordId::from_u128(1), "master").unwrap().is_none());
}

#[test]
fn fs_store_malformed_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path());
    let id = RecordId::from_u128(1);
    let path = store.snapshot_path(id, "master").unwrap();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let err = store.get(id, "master").unwrap_err();
    assert!(matches!(err, CheckError::CorruptSnapshot { .. }), "{err}");
}

#[test]
fn fs_store_rejects_snapshot_of_another_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path());
    let snapshot = snapshot_of(&live_record(1, "Home"));
    let other = RecordId::from_u128(2);

    let path = store.snapshot_path(other, "master").unwrap();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

    let err = store.get(other, "master").unwrap_err();
    assert!(matches!(err, CheckError::CorruptSnapshot { .. }), "{err}");
}

#[test]
fn fs_store_unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path());
    let id = RecordId::from_u128(1);
    // A directory where the file should be cannot be read as a file.
    std::fs::create_dir_all(store.snapshot_path(id, "master").unwrap()).unwrap();

    assert!(store.get(id, "master").is_err());
}

#[test]
fn fs_store_rejects_database_outside_root() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path().join("snapshots"));
    let snapshot = snapshot_of(&live_record(1, "Home"));

    for database in ["../x", "..", "a/b", "a\\b", "", "."] {
        let err = store.get(snapshot.id, database).unwrap_err();
        assert!(matches!(err, CheckError::InvalidDatabase(_)), "{database}: {err}");
    }

    let mut outside = snapshot;
    outside.database = "../x".into();
    assert!(matches!(store.write(&outside), Err(CheckError::InvalidDatabase(_))));
    assert!(!dir.path().join("x").exists());
}

// ── MemoryLiveStore ──────────────────────────────────────────────

#[test]
fn live_store_looks_up_exact_version() {
    let record = live_record(1, "Home");
    let store = MemoryLiveStore::new().with(record.clone());

    assert_eq!(store.get(&SaveTarget::of(&record)).unwrap(), Some(record.clone()));
    let other_version = SaveTarget::new(record.id, "master", "en", 2);
    assert!(store.get(&other_version).unwrap().is_none());
}
