mod common;

use common::*;
use snapguard_check::{
    CheckError, ConflictAggregator, FsSnapshotStore, GuardConfig, IncludeEntry, ProfileConfig,
};
use snapguard_model::{FieldDesync, LiveRecord};
use snapguard_types::RecordId;
use std::path::PathBuf;

fn make_profile_config(name: &str, root: PathBuf) -> ProfileConfig {
    ProfileConfig {
        name: name.to_string(),
        snapshot_root: root,
        includes: vec![IncludeEntry {
            database: "master".into(),
            path: "/sitecore/content".into(),
            excludes: vec![],
        }],
        excluded_fields: vec![],
    }
}

#[test]
fn default_config_is_enabled_without_profiles() {
    let config = GuardConfig::default();
    assert!(config.enabled);
    assert!(config.build_profiles().unwrap().is_empty());
}

#[test]
fn parses_json_document() {
    let config = GuardConfig::from_json(
        r#"{
            "profiles": [{
                "name": "Content",
                "snapshot_root": "serialization/content",
                "includes": [{ "database": "master", "path": "/sitecore/content" }],
                "excluded_fields": ["{00000000-0000-0000-0000-000000001003}"]
            }]
        }"#,
    )
    .unwrap();

    assert!(config.enabled);
    assert_eq!(config.profiles.len(), 1);
    assert_eq!(config.profiles[0].excluded_fields, vec![SORT_ORDER]);
    assert_eq!(config.build_profiles().unwrap()[0].name(), "Content");
}

#[test]
fn invalid_json_is_an_error() {
    let err = GuardConfig::from_json("{ profiles: ").unwrap_err();
    assert!(matches!(err, CheckError::Serialization(_)));
}

#[test]
fn duplicate_profile_names_are_rejected() {
    let config = GuardConfig {
        enabled: true,
        profiles: vec![
            make_profile_config("content", "a".into()),
            make_profile_config("content", "b".into()),
        ],
    };
    assert!(matches!(config.build_profiles(), Err(CheckError::Config(_))));
}

#[test]
fn profile_without_includes_is_rejected() {
    let mut profile = make_profile_config("content", "a".into());
    profile.includes.clear();
    assert!(matches!(profile.build(), Err(CheckError::Config(_))));
}

#[test]
fn relative_include_path_is_rejected() {
    let mut profile = make_profile_config("content", "a".into());
    profile.includes[0].path = "sitecore/content".into();
    assert!(matches!(profile.build(), Err(CheckError::Config(_))));
}

#[test]
fn configured_profile_scopes_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = make_profile_config("content", dir.path().to_path_buf());
    config.excluded_fields = vec![TEXT];

    let home = live_record(1, "Home");
    let mut snapshot = snapshot_of(&home);
    set_serialized(&mut snapshot, TITLE, "Hi");
    set_serialized(&mut snapshot, TEXT, "<p>Other</p>");
    FsSnapshotStore::new(dir.path()).write(&snapshot).unwrap();

    // Same ID, but outside the configured path.
    let layout = LiveRecord {
        path: "/sitecore/layout/Home".into(),
        ..home.clone()
    };

    let aggregator = ConflictAggregator::new(vec![config.build().unwrap()]);
    let report = aggregator.aggregate(&[home.clone()]).unwrap();
    assert_eq!(report.fields_for(home.id), Some(&[FieldDesync::field("Title")][..]));
    assert!(aggregator.aggregate(&[layout]).unwrap().is_empty());
    assert!(report.fields_for(RecordId::from_u128(2)).is_none());
}

#[test]
fn relative_exclude_path_is_rejected() {
    let mut profile = make_profile_config("content", "a".into());
    profile.includes[0].excludes = vec!["sitecore/content/Home".into()];
    assert!(matches!(profile.build(), Err(CheckError::Config(_))));
}

#[test]
fn excludes_default_to_empty() {
    let config = GuardConfig::from_json(
        r#"{"profiles": [{
            "name": "Content",
            "snapshot_root": "s",
            "includes": [{ "database": "master", "path": "/sitecore/content" }]
        }]}"#,
    )
    .unwrap();
    assert!(config.profiles[0].includes[0].excludes.is_empty());
}

#[test]
fn excluded_subtree_is_never_flagged() {
    let dir = tempfile::tempdir().unwrap();
    let config = GuardConfig::from_json(&format!(
        r#"{{"profiles": [{{
            "name": "Content",
            "snapshot_root": {},
            "includes": [{{
                "database": "master",
                "path": "/sitecore/content",
                "excludes": ["/sitecore/content/Home"]
            }}]
        }}]}}"#,
        serde_json::to_string(dir.path()).unwrap()
    ))
    .unwrap();

    let home = live_record(1, "Home");
    let about = live_record(2, "About");
    let store = FsSnapshotStore::new(dir.path());
    for record in [&home, &about] {
        let mut snapshot = snapshot_of(record);
        set_serialized(&mut snapshot, TITLE, "Hi");
        store.write(&snapshot).unwrap();
    }

    let aggregator = ConflictAggregator::new(config.build_profiles().unwrap());
    assert!(aggregator.aggregate(std::slice::from_ref(&home)).unwrap().is_empty());

    let report = aggregator.aggregate(std::slice::from_ref(&about)).unwrap();
    assert_eq!(report.fields_for(about.id), Some(&[FieldDesync::field("Title")][..]));
}
