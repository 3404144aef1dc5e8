//! Guard and profile configuration.
//!
//! Profiles are passed to the guard explicitly; this module only turns a
//! JSON document into them.
//!
//! ```json
//! {
//!   "enabled": true,
//!   "profiles": [{
//!     "name": "Content",
//!     "snapshot_root": "serialization/content",
//!     "includes": [{
//!       "database": "master",
//!       "path": "/sitecore/content",
//!       "excludes": ["/sitecore/content/Archive"]
//!     }],
//!     "excluded_fields": ["{52807595-0F8F-4B20-8D2A-CB71D28C6103}"]
//!   }]
//! }
//! ```

use crate::error::{CheckError, CheckResult};
use crate::profile::{ExcludedFields, PathScope, SyncProfile};
use crate::store::FsSnapshotStore;
use serde::{Deserialize, Serialize};
use snapguard_types::FieldId;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the save guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// When false, every save is allowed without checking.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

fn default_enabled() -> bool {
    true
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            profiles: Vec::new(),
        }
    }
}

impl GuardConfig {
    /// Parses a configuration document.
    pub fn from_json(json: &str) -> CheckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the configuration and builds one profile per entry.
    pub fn build_profiles(&self) -> CheckResult<Vec<SyncProfile>> {
        let mut names = HashSet::new();
        for profile in &self.profiles {
            if !names.insert(profile.name.as_str()) {
                return Err(CheckError::Config(format!(
                    "duplicate profile name '{}'",
                    profile.name
                )));
            }
        }
        self.profiles.iter().map(ProfileConfig::build).collect()
    }
}

/// One synchronization profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    /// Directory holding this profile's snapshots.
    pub snapshot_root: PathBuf,
    pub includes: Vec<IncludeEntry>,
    /// Fields never compared for records in this profile.
    #[serde(default)]
    pub excluded_fields: Vec<FieldId>,
}

/// A (database, path prefix) pair managed by a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncludeEntry {
    pub database: String,
    pub path: String,
    /// Subtrees under `path` that the profile does not manage.
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl ProfileConfig {
    pub fn build(&self) -> CheckResult<SyncProfile> {
        if self.name.trim().is_empty() {
            return Err(CheckError::Config("profile name must not be empty".into()));
        }
        if self.includes.is_empty() {
            return Err(CheckError::Config(format!(
                "profile '{}' has no includes",
                self.name
            )));
        }

        let mut scope = PathScope::new();
        for entry in &self.includes {
            if !entry.path.starts_with('/') {
                return Err(CheckError::Config(format!(
                    "profile '{}': include path '{}' must start with '/'",
                    self.name, entry.path
                )));
            }
            if let Some(exclude) = entry.excludes.iter().find(|e| !e.starts_with('/')) {
                return Err(CheckError::Config(format!(
                    "profile '{}': exclude path '{}' must start with '/'",
                    self.name, exclude
                )));
            }
            scope = scope.include_except(
                entry.database.clone(),
                entry.path.clone(),
                entry.excludes.iter().cloned(),
            );
        }

        let store = FsSnapshotStore::new(self.snapshot_root.clone());
        Ok(SyncProfile::new(self.name.clone(), Arc::new(store))
            .with_scope(Arc::new(scope))
            .with_field_filter(Arc::new(ExcludedFields::new(self.excluded_fields.iter().copied()))))
    }
}
