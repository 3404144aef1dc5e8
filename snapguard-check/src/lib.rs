//! Serialization conflict check for snapguard.
//!
//! Before a live record is saved over its serialized snapshot, the check
//! finds out whether the two have drifted apart in any field that matters.
//! If they have, the save is blocked with a report the operator must confirm.
//!
//! # Components
//!
//! - **Comparator** ([`compare`]): one live field against its serialized value
//! - **Version resolver** ([`resolve_version`]): the snapshot version matching
//!   a live (version, language) pair
//! - **Profile evaluator** ([`evaluate`]): one record under one profile
//! - **Aggregator** ([`ConflictAggregator`]): every record under every profile
//! - **Report formatter** ([`format_report`]): the operator-facing message
//! - **Save guard** ([`SaveGuard`]): the confirmation gate around a save
//!
//! Errors anywhere in the check fail closed: the guard blocks the save with
//! a diagnostic message rather than allowing it.
//!
//! # Example
//!
//! ```
//! use snapguard_check::{
//!     ConflictAggregator, Decision, MemoryLiveStore, MemorySnapshotStore, PendingSave,
//!     SaveGuard, SaveTarget, SyncProfile,
//! };
//! use snapguard_model::{LiveField, LiveRecord, SerializedField, SerializedRecord, SerializedVersion};
//! use snapguard_types::{FieldId, RecordId};
//! use std::sync::Arc;
//!
//! let id = RecordId::new();
//! let title = FieldId::new();
//! let live = LiveRecord::new(id, "master", "/sitecore/content/Home", "en", 1)
//!     .with_field(LiveField::new(title, "Title", "Hello"));
//! let snapshot = SerializedRecord::new(id, "master")
//!     .with_version(SerializedVersion::new(1, "en").with_field(SerializedField::new(title, "Hi")));
//!
//! let profile = SyncProfile::new("content", Arc::new(MemorySnapshotStore::new().with(snapshot)));
//! let guard = SaveGuard::new(
//!     ConflictAggregator::new(vec![profile]),
//!     Arc::new(MemoryLiveStore::new().with(live.clone())),
//! );
//!
//! let save = PendingSave::new(vec![SaveTarget::of(&live)]);
//! assert!(matches!(guard.check_before_save(&save), Decision::Block { .. }));
//! ```

mod aggregate;
mod compare;
pub mod config;
mod error;
mod evaluate;
mod guard;
pub mod profile;
pub mod report;
pub mod store;
mod version;

pub use aggregate::{ConflictAggregator, ConflictReport, RecordConflicts};
pub use compare::{compare, Verdict};
pub use config::{GuardConfig, IncludeEntry, ProfileConfig};
pub use error::{CheckError, CheckResult};
pub use evaluate::evaluate;
pub use guard::{
    Answer, Decision, GuardState, PendingSave, Resolution, SaveGuard, SaveTarget, SaveWorkflow,
};
pub use profile::{AllFields, ExcludedFields, FieldFilter, IncludeAll, PathScope, ScopePredicate, SyncProfile};
pub use report::{format_failure, format_report};
pub use store::{FsSnapshotStore, LiveRecordStore, MemoryLiveStore, MemorySnapshotStore, SnapshotStore};
pub use version::resolve_version;
