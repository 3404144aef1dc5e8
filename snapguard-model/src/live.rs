use serde::{Deserialize, Serialize};
use snapguard_types::{is_builtin_audit_field, FieldId, RecordId};

/// A record as held by the live store, about to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveRecord {
    pub id: RecordId,
    /// Database (namespace) the record lives in, e.g. `master`.
    pub database: String,
    /// Content path, e.g. `/sitecore/content/Home`. Used by scope predicates.
    pub path: String,
    /// Human-readable name shown in conflict reports.
    pub display_name: String,
    pub language: String,
    pub version: u32,
    #[serde(default)]
    pub fields: Vec<LiveField>,
}

impl LiveRecord {
    pub fn new(
        id: RecordId,
        database: impl Into<String>,
        path: impl Into<String>,
        language: impl Into<String>,
        version: u32,
    ) -> Self {
        let path = path.into();
        let display_name = path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            id,
            database: database.into(),
            path,
            display_name,
            language: language.into(),
            version,
            fields: Vec::new(),
        }
    }

    /// Replaces the display name (defaults to the last path segment).
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Appends a field.
    pub fn with_field(mut self, field: LiveField) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by ID.
    pub fn field(&self, id: FieldId) -> Option<&LiveField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// A single field value on a live record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveField {
    pub id: FieldId,
    pub name: String,
    pub field_type: FieldType,
    /// Raw string form of the value; compared ordinally.
    pub value: String,
    /// Set by the live store for system-maintained audit fields.
    #[serde(default)]
    pub builtin: bool,
}

impl LiveField {
    pub fn new(id: FieldId, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            field_type: FieldType::Text,
            value: value.into(),
            builtin: false,
        }
    }

    /// Shorthand for a system-maintained audit field.
    pub fn audit(id: FieldId, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            builtin: true,
            ..Self::new(id, name, value)
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// True for audit fields, whether flagged by the store or well-known by ID.
    pub fn is_builtin(&self) -> bool {
        self.builtin || is_builtin_audit_field(self.id)
    }

    pub fn is_attachment(&self) -> bool {
        self.field_type == FieldType::Attachment
    }
}

/// Type tag of a live field.
///
/// Only [`FieldType::Attachment`] changes how a field is treated; the rest are
/// carried for reporting. Unknown tags deserialize as [`FieldType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    RichText,
    Number,
    Checkbox,
    DateTime,
    Image,
    Link,
    Reference,
    /// Binary blob field. Never compared.
    Attachment,
    #[serde(other)]
    Other,
}
