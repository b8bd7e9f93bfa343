use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use enterprise_forge_core::types::DefinitionMetadata;

use crate::definition::{Definition, DefinitionFactory};
use crate::error::RegistryError;
use crate::unit::DefinitionUnit;

/// A located definition, ready to be instantiated.
pub struct DefinitionItem {
    unit: DefinitionUnit,
    factory: Arc<dyn DefinitionFactory>,
    instance: OnceLock<Arc<dyn Definition>>,
}

impl DefinitionItem {
    pub(crate) fn new(unit: DefinitionUnit, factory: Arc<dyn DefinitionFactory>) -> Self {
        Self {
            unit,
            factory,
            instance: OnceLock::new(),
        }
    }

    /// The unit's file name without extension.
    pub fn abbreviated_file_name(&self) -> &str {
        self.unit.file_stem()
    }

    pub fn file_path(&self) -> &Path {
        self.unit.path()
    }

    pub fn metadata(&self) -> &DefinitionMetadata {
        self.unit.metadata()
    }

    /// Name of the entry point that instantiates this definition.
    pub fn entry_point(&self) -> &str {
        &self.unit.metadata().entry_point
    }

    pub fn unit(&self) -> &DefinitionUnit {
        &self.unit
    }

    /// Returns the definition, constructing it on first use.
    ///
    /// Later calls return the same instance and ignore `args`.
    pub fn instance(&self, args: &[String]) -> Result<Arc<dyn Definition>, RegistryError> {
        if let Some(existing) = self.instance.get() {
            return Ok(Arc::clone(existing));
        }
        let created = self
            .factory
            .instantiate(&self.unit, args)
            .map_err(|reason| RegistryError::load(self.unit.path(), reason))?;
        Ok(Arc::clone(self.instance.get_or_init(|| created)))
    }
}

impl fmt::Debug for DefinitionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinitionItem")
            .field("file_path", &self.unit.path())
            .field("metadata", self.unit.metadata())
            .field("instantiated", &self.instance.get().is_some())
            .finish()
    }
}
