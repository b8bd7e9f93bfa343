use std::path::PathBuf;

use enterprise_forge_codegen::CompileError;
use enterprise_forge_dsl::ParseError;
use enterprise_forge_registry::RegistryError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments, configuration or unknown definition
/// - 3: a definition failed to parse, load or validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by CLI command handlers.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A definition file is not a well-formed document.
    #[error("parse error in {}: {error}", .file.display())]
    Parse {
        error: ParseError,
        source_text: String,
        file: PathBuf,
    },

    /// Finding or loading a definition failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The compile pipeline failed after the definition was loaded.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Nothing to check.
    #[error("no definition files found in {}", .path.display())]
    NoDefinitionFiles { path: PathBuf },

    /// `check` found invalid definitions; each was already reported.
    #[error("{failed} of {total} definition files failed")]
    CheckFailed { failed: usize, total: usize },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Converts a compile failure, recovering the source text of a
    /// malformed definition so it can be shown with the diagnostic.
    pub fn from_compile(error: CompileError) -> Self {
        match error {
            CompileError::Registry(registry) => Self::from_registry(registry),
            other => Self::Compile(other),
        }
    }

    /// Like `From<RegistryError>`, but re-reads the file of a parse failure.
    pub fn from_registry(error: RegistryError) -> Self {
        match error {
            RegistryError::Parse { path, error } => match std::fs::read_to_string(&path) {
                Ok(source_text) => Self::Parse {
                    error,
                    source_text,
                    file: path,
                },
                Err(_) => Self::Registry(RegistryError::Parse { path, error }),
            },
            other => Self::Registry(other),
        }
    }

    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } | Self::CheckFailed { .. } => ExitCode::ParseError,
            Self::Registry(RegistryError::NotFound { .. }) => ExitCode::InvalidArguments,
            Self::Registry(_) => ExitCode::ParseError,
            Self::Compile(e) => match e.kind() {
                "not_found" | "unsupported_target" => ExitCode::InvalidArguments,
                "parse" | "load" | "validation" => ExitCode::ParseError,
                _ => ExitCode::GeneralError,
            },
            Self::Config { .. } | Self::NoDefinitionFiles { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { error, file, .. } => serde_json::json!({
                "error": "parse_error",
                "file": file.display().to_string(),
                "line": error.position.line,
                "column": error.position.column,
                "expected": error.expected,
                "message": error.to_string(),
            }),
            Self::Registry(e) => serde_json::json!({
                "error": registry_kind(e),
                "message": e.to_string(),
            }),
            Self::Compile(e) => serde_json::json!({
                "error": e.kind(),
                "message": e.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}

fn registry_kind(error: &RegistryError) -> &'static str {
    match error {
        RegistryError::NotFound { .. } => "not_found",
        RegistryError::Parse { .. } => "parse",
        _ => "load",
    }
}
