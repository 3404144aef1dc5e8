use serde::{Deserialize, Serialize};
use std::fmt;

/// A single desynchronization between a live record and its snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDesync {
    /// The named field differs from its serialized value.
    Field(String),
    /// The snapshot has no version matching the live (version, language).
    Version,
}

impl FieldDesync {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Name shown in reports. The missing-version sentinel reads `Version`.
    pub fn name(&self) -> &str {
        match self {
            Self::Field(name) => name,
            Self::Version => "Version",
        }
    }
}

impl fmt::Display for FieldDesync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
