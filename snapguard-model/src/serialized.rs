use serde::{Deserialize, Serialize};
use snapguard_types::{FieldId, RecordId};

/// The last externalized snapshot of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedRecord {
    pub id: RecordId,
    pub database: String,
    #[serde(default)]
    pub path: String,
    /// Fields whose value is the same for every version and language.
    #[serde(default)]
    pub shared_fields: Vec<SerializedField>,
    #[serde(default)]
    pub versions: Vec<SerializedVersion>,
}

impl SerializedRecord {
    pub fn new(id: RecordId, database: impl Into<String>) -> Self {
        Self {
            id,
            database: database.into(),
            path: String::new(),
            shared_fields: Vec::new(),
            versions: Vec::new(),
        }
    }

    pub fn with_shared_field(mut self, field: SerializedField) -> Self {
        self.shared_fields.push(field);
        self
    }

    pub fn with_version(mut self, version: SerializedVersion) -> Self {
        self.versions.push(version);
        self
    }
}

/// One (version number, language) entry of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedVersion {
    pub number: u32,
    pub language: String,
    #[serde(default)]
    pub fields: Vec<SerializedField>,
}

impl SerializedVersion {
    pub fn new(number: u32, language: impl Into<String>) -> Self {
        Self {
            number,
            language: language.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: SerializedField) -> Self {
        self.fields.push(field);
        self
    }
}

/// A serialized field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedField {
    pub id: FieldId,
    /// Field name as written at export time. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_hint: Option<String>,
    pub value: String,
}

impl SerializedField {
    pub fn new(id: FieldId, value: impl Into<String>) -> Self {
        Self {
            id,
            name_hint: None,
            value: value.into(),
        }
    }

    pub fn named(id: FieldId, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name_hint: Some(name.into()),
            value: value.into(),
        }
    }
}
