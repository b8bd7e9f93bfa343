//! The compile pipeline: find a definition, create its enterprise, generate
//! source for every entity and key, and hand each artifact to a writer.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use enterprise_forge_core::types::Enterprise;
use enterprise_forge_core::DomainError;
use enterprise_forge_registry::{Registry, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::csharp::{generate_entity, generate_entity_key, GeneratorOptions};

/// Sub-folder of the output folder that receives entity keys.
pub const KEYS_FOLDER: &str = "Keys";

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    CSharp,
}

impl Target {
    /// Looks a target up by its settings name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csharp" | "c#" | "cs" => Some(Self::CSharp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::CSharp => "cs",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to compile and where to put the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub definition_name: String,
    pub definition_folder: PathBuf,
    pub target: String,
    pub output_folder: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Namespace for generated code; `Domain` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Settings {
    /// Settings targeting C# with no log file and the default namespace.
    pub fn new(
        definition_name: impl Into<String>,
        definition_folder: impl Into<PathBuf>,
        output_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            definition_name: definition_name.into(),
            definition_folder: definition_folder.into(),
            target: Target::CSharp.name().to_string(),
            output_folder: output_folder.into(),
            log_file: None,
            namespace: None,
        }
    }

    pub fn generator_options(&self) -> Result<GeneratorOptions, DomainError> {
        match &self.namespace {
            Some(namespace) => GeneratorOptions::new(namespace.as_str()),
            None => Ok(GeneratorOptions::default()),
        }
    }
}

/// Receives generated source. Called once per artifact.
pub trait ArtifactWriter {
    fn write(&self, path: &Path, enterprise: &Enterprise, source: &str) -> io::Result<()>;
}

/// One generated file, with its path relative to the output folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub source: String,
}

/// The result of a successful compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub enterprise: Enterprise,
    /// Written paths, in write order.
    pub artifacts: Vec<PathBuf>,
}

/// Errors that end a compile.
#[derive(Debug)]
#[non_exhaustive]
pub enum CompileError {
    /// The definition could not be found or loaded.
    Registry(RegistryError),
    /// The settings name a target with no generator.
    UnsupportedTarget(String),
    /// A settings value failed validation.
    Validation(DomainError),
    /// The writer rejected an artifact.
    Write { path: PathBuf, source: io::Error },
}

impl CompileError {
    /// A stable machine-readable classification.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Registry(RegistryError::NotFound { .. }) => "not_found",
            Self::Registry(RegistryError::Parse { .. }) => "parse",
            Self::Registry(_) => "load",
            Self::UnsupportedTarget(_) => "unsupported_target",
            Self::Validation(_) => "validation",
            Self::Write { .. } => "write",
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(e) => write!(f, "{e}"),
            Self::UnsupportedTarget(target) => {
                write!(f, "unsupported target '{target}': expected 'csharp'")
            }
            Self::Validation(e) => write!(f, "invalid settings: {e}"),
            Self::Write { path, source } => {
                write!(f, "failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registry(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Write { source, .. } => Some(source),
            Self::UnsupportedTarget(_) => None,
        }
    }
}

impl From<RegistryError> for CompileError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<DomainError> for CompileError {
    fn from(e: DomainError) -> Self {
        Self::Validation(e)
    }
}

/// Generates every artifact for `enterprise`: entities first, then keys
/// under [`KEYS_FOLDER`], each in declaration order.
pub fn generate_artifacts(
    enterprise: &Enterprise,
    options: &GeneratorOptions,
    target: Target,
) -> Vec<Artifact> {
    let extension = target.extension();
    let entities = enterprise.entities().iter().map(|entity| Artifact {
        path: PathBuf::from(format!("{}.{extension}", entity.name())),
        source: generate_entity(entity, options),
    });
    let keys = enterprise.keys().iter().map(|key| Artifact {
        path: Path::new(KEYS_FOLDER).join(format!("{}.{extension}", key.name())),
        source: generate_entity_key(key, options),
    });
    entities.chain(keys).collect()
}

/// Runs the pipeline described by `settings`.
///
/// Settings are validated before the registry is consulted. Artifacts are
/// written in [`generate_artifacts`] order; the first write failure stops
/// the compile.
#[tracing::instrument(
    skip_all,
    fields(definition = %settings.definition_name, target = %settings.target)
)]
pub fn compile(
    settings: &Settings,
    registry: &Registry,
    writer: &dyn ArtifactWriter,
) -> Result<CompileReport, CompileError> {
    let target = Target::from_name(&settings.target)
        .ok_or_else(|| CompileError::UnsupportedTarget(settings.target.clone()))?;
    let options = settings.generator_options()?;

    let item = registry.find(&settings.definition_name, &settings.definition_folder)?;
    let enterprise = item.instance(&[])?.create();
    debug!(
        enterprise = %enterprise,
        entities = enterprise.entities().len(),
        keys = enterprise.keys().len(),
        "created enterprise"
    );

    let mut artifacts = Vec::new();
    for artifact in generate_artifacts(&enterprise, &options, target) {
        let path = settings.output_folder.join(&artifact.path);
        writer
            .write(&path, &enterprise, &artifact.source)
            .map_err(|source| CompileError::Write {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), "wrote artifact");
        artifacts.push(path);
    }

    Ok(CompileReport {
        enterprise,
        artifacts,
    })
}
