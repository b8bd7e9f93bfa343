use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::definition::DefinitionFactory;
use crate::document::{DocumentFactory, DOCUMENT_ENTRY_POINT};
use crate::error::RegistryError;
use crate::fs::{FileSystem, StdFileSystem};
use crate::item::DefinitionItem;
use crate::unit::DefinitionUnit;

/// File extension of definition units.
pub const DEFINITION_EXTENSION: &str = "definition";

/// How a requested definition name is compared with declared names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatch {
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

impl NameMatch {
    pub fn matches(self, declared: &str, requested: &str) -> bool {
        match self {
            Self::CaseInsensitive => declared.to_lowercase() == requested.to_lowercase(),
            Self::CaseSensitive => declared == requested,
        }
    }
}

/// Everything found in a folder by [`Registry::list`].
#[derive(Debug, Default)]
pub struct Listing {
    pub items: Vec<DefinitionItem>,
    /// Units that could not be loaded, in path order.
    pub failures: Vec<RegistryError>,
}

/// Locates definitions by name and resolves their entry points.
///
/// Entry-point names are matched case-insensitively. The `document`
/// entry point is always available.
pub struct Registry {
    factories: BTreeMap<String, Arc<dyn DefinitionFactory>>,
    name_match: NameMatch,
    file_system: Arc<dyn FileSystem>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let registry = Self {
            factories: BTreeMap::new(),
            name_match: NameMatch::default(),
            file_system: Arc::new(StdFileSystem),
        };
        registry.with_entry_point(DOCUMENT_ENTRY_POINT, DocumentFactory)
    }

    /// Registers `factory` under `name`, replacing any earlier registration.
    pub fn with_entry_point(
        mut self,
        name: impl AsRef<str>,
        factory: impl DefinitionFactory + 'static,
    ) -> Self {
        self.factories
            .insert(name.as_ref().to_lowercase(), Arc::new(factory));
        self
    }

    pub fn with_name_match(mut self, name_match: NameMatch) -> Self {
        self.name_match = name_match;
        self
    }

    pub fn with_file_system(mut self, file_system: impl FileSystem + 'static) -> Self {
        self.file_system = Arc::new(file_system);
        self
    }

    /// Registered entry-point names, lowercased and sorted.
    pub fn entry_points(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Finds the definition named `name` in `folder`.
    ///
    /// Units are tried in path order and the first whose declared name
    /// matches wins. A unit that fails to load is skipped, unless its file
    /// name matches `name`, in which case its failure is returned.
    #[tracing::instrument(skip(self, folder), fields(folder = %folder.display()))]
    pub fn find(&self, name: &str, folder: &Path) -> Result<DefinitionItem, RegistryError> {
        let not_found = || RegistryError::NotFound {
            name: name.to_string(),
            folder: folder.to_path_buf(),
        };
        if !self.file_system.exists(folder) {
            debug!("definition folder does not exist");
            return Err(not_found());
        }

        for path in self.candidates(folder)? {
            debug!(path = %path.display(), "loading candidate");
            match DefinitionUnit::load(&path) {
                Ok(unit) if self.name_match.matches(&unit.metadata().name, name) => {
                    let item = self.resolve(unit)?;
                    info!(
                        path = %item.file_path().display(),
                        version = %item.metadata().version,
                        entry_point = item.entry_point(),
                        "found definition"
                    );
                    return Ok(item);
                }
                Ok(unit) => {
                    debug!(declared = %unit.metadata().name, "name does not match");
                }
                Err(e) if self.stem_matches(&path, name) => return Err(e),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unloadable definition");
                }
            }
        }
        Err(not_found())
    }

    /// Loads every unit in `folder`.
    pub fn list(&self, folder: &Path) -> Result<Listing, RegistryError> {
        if !self.file_system.exists(folder) {
            return Err(RegistryError::NotFound {
                name: format!("*.{DEFINITION_EXTENSION}"),
                folder: folder.to_path_buf(),
            });
        }
        let mut listing = Listing::default();
        for path in self.candidates(folder)? {
            match self.load(&path) {
                Ok(item) => listing.items.push(item),
                Err(e) => listing.failures.push(e),
            }
        }
        Ok(listing)
    }

    /// Loads the unit at `path` directly, without a name lookup.
    pub fn load(&self, path: &Path) -> Result<DefinitionItem, RegistryError> {
        DefinitionUnit::load(path).and_then(|unit| self.resolve(unit))
    }

    fn resolve(&self, unit: DefinitionUnit) -> Result<DefinitionItem, RegistryError> {
        let entry_point = unit.metadata().entry_point.to_lowercase();
        match self.factories.get(&entry_point) {
            Some(factory) => Ok(DefinitionItem::new(unit, Arc::clone(factory))),
            None => Err(RegistryError::load(
                unit.path(),
                format!(
                    "entry point '{}' is not registered",
                    unit.metadata().entry_point
                ),
            )),
        }
    }

    fn stem_matches(&self, path: &Path, name: &str) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| self.name_match.matches(stem, name))
    }

    /// `folder/*.definition`, sorted by path.
    fn candidates(&self, folder: &Path) -> Result<Vec<PathBuf>, RegistryError> {
        let escaped = glob::Pattern::escape(&folder.to_string_lossy());
        let pattern = format!("{escaped}/*.{DEFINITION_EXTENSION}");
        let entries = glob::glob(&pattern)
            .map_err(|e| RegistryError::load(folder, format!("invalid folder pattern: {e}")))?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => warn!(error = %e, "skipping unreadable directory entry"),
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entry_points", &self.factories.keys().collect::<Vec<_>>())
            .field("name_match", &self.name_match)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoFolders;

    impl FileSystem for NoFolders {
        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    #[test]
    fn name_match_policies() {
        assert!(NameMatch::CaseInsensitive.matches("Crm", "crm"));
        assert!(!NameMatch::CaseSensitive.matches("Crm", "crm"));
        assert!(NameMatch::CaseSensitive.matches("Crm", "Crm"));
    }

    #[test]
    fn document_entry_point_is_built_in() {
        let registry = Registry::new();
        assert_eq!(registry.entry_points().collect::<Vec<_>>(), ["document"]);
    }

    #[test]
    fn entry_points_are_case_insensitive() {
        let registry = Registry::new().with_entry_point("Custom", DocumentFactory);
        assert_eq!(
            registry.entry_points().collect::<Vec<_>>(),
            ["custom", "document"]
        );
    }

    #[test]
    fn missing_folder_is_not_found() {
        let registry = Registry::new().with_file_system(NoFolders);
        let err = registry.find("Crm", Path::new("anywhere")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                name: "Crm".into(),
                folder: PathBuf::from("anywhere"),
            }
        );
        assert!(registry.list(Path::new("anywhere")).is_err());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
        assert_send_sync::<DefinitionItem>();
    }
}
