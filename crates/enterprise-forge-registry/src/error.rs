use std::fmt;
use std::path::PathBuf;

use enterprise_forge_dsl::ParseError;

/// Errors that occur while locating or loading a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// No unit in the folder declares the requested name.
    NotFound { name: String, folder: PathBuf },
    /// A unit's source is not a well-formed document.
    Parse { path: PathBuf, error: ParseError },
    /// A unit was found but could not be turned into a definition.
    LoadError { path: PathBuf, reason: String },
}

impl RegistryError {
    pub(crate) fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::LoadError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for failures of a unit that was found, as opposed to `NotFound`.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::LoadError { .. })
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name, folder } => {
                write!(
                    f,
                    "no definition named '{name}' in '{}'",
                    folder.display()
                )
            }
            Self::Parse { path, error } => {
                write!(f, "failed to parse '{}': {error}", path.display())
            }
            Self::LoadError { path, reason } => {
                write!(f, "failed to load '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}
