use std::path::{Path, PathBuf};

use enterprise_forge_codegen::Settings;
use serde::{Deserialize, Serialize};

use crate::cli::{BuildArgs, GlobalOpts};
use crate::error::CliError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ENTERPRISE_FORGE_CONFIG";

/// Project-local config file name.
pub const LOCAL_CONFIG: &str = "enterprise-forge.toml";

/// CLI configuration loaded from `enterprise-forge.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for `build`, `list` and `check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Definition compiled when `build` is given no name.
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default = "default_definition_folder")]
    pub definition_folder: PathBuf,
    #[serde(default = "default_output_folder")]
    pub output_folder: PathBuf,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            definition: None,
            definition_folder: default_definition_folder(),
            output_folder: default_output_folder(),
            target: default_target(),
            namespace: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log events go here instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_definition_folder() -> PathBuf {
    PathBuf::from("definitions/")
}

fn default_output_folder() -> PathBuf {
    PathBuf::from("generated/")
}

fn default_target() -> String {
    "csharp".to_string()
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit)
/// 2. `ENTERPRISE_FORGE_CONFIG` env var
/// 3. `./enterprise-forge.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/enterprise-forge/config.toml`
/// 5. `~/.config/enterprise-forge/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("enterprise-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/enterprise-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

/// Resolve compile settings from config + CLI overrides.
///
/// CLI flags take precedence over config file values.
pub fn resolve_settings(
    config: &CliConfig,
    global: &GlobalOpts,
    args: &BuildArgs,
) -> Result<Settings, CliError> {
    let definition_name = args
        .name
        .clone()
        .or_else(|| config.build.definition.clone())
        .ok_or_else(|| CliError::Config {
            message: "no definition name given; pass one to `build` or set `build.definition`"
                .to_string(),
        })?;

    Ok(Settings {
        definition_name,
        definition_folder: resolve_definition_folder(config, args.definitions.as_deref()),
        target: args
            .target
            .clone()
            .unwrap_or_else(|| config.build.target.clone()),
        output_folder: args
            .output
            .clone()
            .unwrap_or_else(|| config.build.output_folder.clone()),
        log_file: resolve_log_file(config, global),
        namespace: args
            .namespace
            .clone()
            .or_else(|| config.build.namespace.clone()),
    })
}

pub fn resolve_definition_folder(config: &CliConfig, flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| config.build.definition_folder.clone())
}

pub fn resolve_log_file(config: &CliConfig, global: &GlobalOpts) -> Option<PathBuf> {
    global
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
}
