use std::path::{Path, PathBuf};

use enterprise_forge_core::types::{DefinitionMetadata, FileVersion};
use enterprise_forge_dsl::{parse_source, Json};

use crate::error::RegistryError;

/// A parsed definition unit: its source document plus the metadata it
/// declares about itself.
///
/// A unit is always loaded from scratch; nothing read for one unit is
/// reused for another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionUnit {
    path: PathBuf,
    metadata: DefinitionMetadata,
    document: Json,
}

impl DefinitionUnit {
    /// Reads and parses the unit at `path`.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::load(path, format!("cannot read file: {e}")))?;
        Self::from_source(path, &source)
    }

    /// Parses a unit from its source text. `path` is only used for reporting.
    pub fn from_source(path: impl Into<PathBuf>, source: &str) -> Result<Self, RegistryError> {
        let path = path.into();
        let document = match parse_source(source) {
            Ok(document) => document,
            Err(error) => return Err(RegistryError::Parse { path, error }),
        };
        let metadata = match read_metadata(&document) {
            Ok(metadata) => metadata,
            Err(reason) => return Err(RegistryError::LoadError { path, reason }),
        };
        Ok(Self {
            path,
            metadata,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &DefinitionMetadata {
        &self.metadata
    }

    /// The whole parsed document, `definition` member included.
    pub fn document(&self) -> &Json {
        &self.document
    }

    /// The file name without its extension.
    pub fn file_stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

fn read_metadata(document: &Json) -> Result<DefinitionMetadata, String> {
    if document.as_object().is_none() {
        return Err(format!(
            "expected an object at the top level, found {}",
            document.kind()
        ));
    }
    let definition = document
        .get("definition")
        .ok_or_else(|| "missing member 'definition'".to_string())?;
    if definition.as_object().is_none() {
        return Err(format!(
            "definition: expected an object, found {}",
            definition.kind()
        ));
    }

    let text = |key: &str| -> Result<&str, String> {
        match definition.get(key) {
            Some(value) => value.as_str().ok_or_else(|| {
                format!("definition.{key}: expected a string, found {}", value.kind())
            }),
            None => Err(format!("definition: missing member '{key}'")),
        }
    };

    let version =
        FileVersion::parse(text("version")?).map_err(|e| format!("definition.version: {e}"))?;
    let name = text("name")?;
    if name.trim().is_empty() {
        return Err("definition.name: must not be empty".to_string());
    }
    let description = text("description")?;
    let entry_point = text("entryPoint")?;
    if entry_point.trim().is_empty() {
        return Err("definition.entryPoint: must not be empty".to_string());
    }

    Ok(DefinitionMetadata::new(
        version,
        name,
        description,
        entry_point,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRM: &str = r#"// Customer management
{
  "definition": { "version": "1.2", "name": "Crm", "description": "Customers", "entryPoint": "document" },
  "enterprise": { "name": "crm", "title": "Crm" }
}
"#;

    #[test]
    fn reads_metadata() {
        let unit = DefinitionUnit::from_source("defs/crm.definition", CRM).unwrap();
        let metadata = unit.metadata();
        assert_eq!(metadata.name, "Crm");
        assert_eq!(metadata.version, FileVersion::new(1, 2));
        assert_eq!(metadata.description, "Customers");
        assert_eq!(metadata.entry_point, "document");
        assert_eq!(unit.file_stem(), "crm");
        assert!(unit.document().get("enterprise").is_some());
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let err = DefinitionUnit::from_source("bad.definition", "{\"definition\":").unwrap_err();
        match err {
            RegistryError::Parse { path, error } => {
                assert_eq!(path, PathBuf::from("bad.definition"));
                assert_eq!(error.position.line, 1);
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = DefinitionUnit::from_source("a.definition", r#"["x"]"#).unwrap_err();
        assert!(err.to_string().contains("found array"));
    }

    #[test]
    fn missing_definition_member() {
        let err = DefinitionUnit::from_source("a.definition", "{}").unwrap_err();
        assert!(err.to_string().contains("missing member 'definition'"));
    }

    #[test]
    fn missing_entry_point() {
        let source = r#"{"definition":{"version":"1.0","name":"A","description":""}}"#;
        let err = DefinitionUnit::from_source("a.definition", source).unwrap_err();
        assert!(err.to_string().contains("missing member 'entryPoint'"));
    }

    #[test]
    fn bad_version_is_reported_with_locator() {
        let source =
            r#"{"definition":{"version":"one","name":"A","description":"","entryPoint":"document"}}"#;
        let err = DefinitionUnit::from_source("a.definition", source).unwrap_err();
        assert!(err.to_string().contains("definition.version"));
    }

    #[test]
    fn non_string_member_is_reported() {
        let source =
            r#"{"definition":{"version":"1.0","name":["A"],"description":"","entryPoint":"document"}}"#;
        let err = DefinitionUnit::from_source("a.definition", source).unwrap_err();
        assert!(err.to_string().contains("definition.name: expected a string, found array"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DefinitionUnit::load(&dir.path().join("none.definition")).unwrap_err();
        assert!(err.to_string().contains("cannot read file"));
    }
}
