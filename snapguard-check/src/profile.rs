//! Synchronization profiles and the predicates they bundle.
//!
//! A profile decides which records it manages ([`ScopePredicate`]), where
//! their snapshots live ([`SnapshotStore`]), and which fields are worth
//! comparing ([`FieldFilter`]).

use crate::store::SnapshotStore;
use snapguard_model::LiveRecord;
use snapguard_types::FieldId;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Decides whether a record is managed by a profile.
pub trait ScopePredicate: Send + Sync {
    fn includes(&self, record: &LiveRecord) -> bool;
}

/// Decides whether a field should ever be compared.
pub trait FieldFilter: Send + Sync {
    fn includes(&self, field_id: FieldId) -> bool;
}

/// Scope that manages every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAll;

impl ScopePredicate for IncludeAll {
    fn includes(&self, _record: &LiveRecord) -> bool {
        true
    }
}

/// Field filter that compares every field.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllFields;

impl FieldFilter for AllFields {
    fn includes(&self, _field_id: FieldId) -> bool {
        true
    }
}

/// Scope built from (database, path prefix) include entries.
///
/// Paths match case-insensitively on `/` boundaries, so `/sitecore/content`
/// includes `/sitecore/content/Home` but not `/sitecore/contentx`. Each
/// include may carry exclude prefixes; records under them are out of scope.
#[derive(Debug, Clone, Default)]
pub struct PathScope {
    roots: Vec<ScopeRoot>,
}

#[derive(Debug, Clone)]
struct ScopeRoot {
    database: String,
    path: String,
    excludes: Vec<String>,
}

fn normalize(path: &str) -> String {
    path.trim_end_matches('/').to_lowercase()
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix || path.starts_with(&format!("{prefix}/"))
}

impl PathScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(self, database: impl Into<String>, path: impl Into<String>) -> Self {
        self.include_except(database, path, std::iter::empty::<String>())
    }

    /// Includes `path` in `database` minus the subtrees under `excludes`.
    pub fn include_except<S: Into<String>>(
        mut self,
        database: impl Into<String>,
        path: impl Into<String>,
        excludes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.roots.push(ScopeRoot {
            database: database.into(),
            path: normalize(&path.into()),
            excludes: excludes.into_iter().map(|e| normalize(&e.into())).collect(),
        });
        self
    }
}

impl ScopePredicate for PathScope {
    fn includes(&self, record: &LiveRecord) -> bool {
        let path = record.path.to_lowercase();
        self.roots.iter().any(|root| {
            root.database.eq_ignore_ascii_case(&record.database)
                && is_under(&path, &root.path)
                && !root.excludes.iter().any(|exclude| is_under(&path, exclude))
        })
    }
}

/// Field filter that compares everything except a fixed set of fields.
#[derive(Debug, Clone, Default)]
pub struct ExcludedFields(HashSet<FieldId>);

impl ExcludedFields {
    pub fn new(ids: impl IntoIterator<Item = FieldId>) -> Self {
        Self(ids.into_iter().collect())
    }
}

impl FieldFilter for ExcludedFields {
    fn includes(&self, field_id: FieldId) -> bool {
        !self.0.contains(&field_id)
    }
}

/// A named bundle of scope, snapshot store and field filter.
#[derive(Clone)]
pub struct SyncProfile {
    name: String,
    scope: Arc<dyn ScopePredicate>,
    store: Arc<dyn SnapshotStore>,
    fields: Arc<dyn FieldFilter>,
}

impl SyncProfile {
    /// Creates a profile that manages every record and compares every field.
    pub fn new(name: impl Into<String>, store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            name: name.into(),
            scope: Arc::new(IncludeAll),
            store,
            fields: Arc::new(AllFields),
        }
    }

    pub fn with_scope(mut self, scope: Arc<dyn ScopePredicate>) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_field_filter(mut self, fields: Arc<dyn FieldFilter>) -> Self {
        self.fields = fields;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &dyn ScopePredicate {
        self.scope.as_ref()
    }

    pub fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }

    pub fn fields(&self) -> &dyn FieldFilter {
        self.fields.as_ref()
    }
}

impl fmt::Debug for SyncProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncProfile").field("name", &self.name).finish_non_exhaustive()
    }
}
