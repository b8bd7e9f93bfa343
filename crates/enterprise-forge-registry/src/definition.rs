use std::sync::Arc;

use enterprise_forge_core::types::Enterprise;

use crate::unit::DefinitionUnit;

/// The capability every definition exposes: producing its enterprise.
pub trait Definition: Send + Sync {
    fn create(&self) -> Enterprise;
}

/// Builds a [`Definition`] for a loaded unit.
///
/// Factories are registered with the registry under an entry-point name;
/// a unit whose metadata names that entry point is instantiated through
/// it. Validation belongs here so that [`Definition::create`] cannot fail.
pub trait DefinitionFactory: Send + Sync {
    /// Instantiates the unit. `args` are passed through from the caller.
    ///
    /// Returns a human-readable reason on failure.
    fn instantiate(
        &self,
        unit: &DefinitionUnit,
        args: &[String],
    ) -> Result<Arc<dyn Definition>, String>;
}

impl<F> DefinitionFactory for F
where
    F: Fn(&DefinitionUnit, &[String]) -> Result<Arc<dyn Definition>, String> + Send + Sync,
{
    fn instantiate(
        &self,
        unit: &DefinitionUnit,
        args: &[String],
    ) -> Result<Arc<dyn Definition>, String> {
        self(unit, args)
    }
}
