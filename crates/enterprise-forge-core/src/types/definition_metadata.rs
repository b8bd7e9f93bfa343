use serde::{Deserialize, Serialize};

use super::file_version::FileVersion;

/// The descriptor every definition unit declares about itself.
///
/// `entry_point` names the registered factory that turns the unit into a
/// callable definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionMetadata {
    pub version: FileVersion,
    pub name: String,
    pub description: String,
    pub entry_point: String,
}

impl DefinitionMetadata {
    pub fn new(
        version: FileVersion,
        name: impl Into<String>,
        description: impl Into<String>,
        entry_point: impl Into<String>,
    ) -> Self {
        Self {
            version,
            name: name.into(),
            description: description.into(),
            entry_point: entry_point.into(),
        }
    }
}

impl std::fmt::Display for DefinitionMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} ({})", self.name, self.version, self.entry_point)
    }
}
