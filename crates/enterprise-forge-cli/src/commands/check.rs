use std::path::{Path, PathBuf};

use enterprise_forge_registry::{Registry, RegistryError, DEFINITION_EXTENSION};

use crate::cli::{CheckArgs, GlobalOpts};
use crate::config::{resolve_definition_folder, CliConfig};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// What checking one file found.
struct Checked {
    name: String,
    entities: usize,
    keys: usize,
}

/// Run the `check` command: parse, load and validate definition files,
/// rendering a diagnostic for each failure.
pub fn run(
    args: CheckArgs,
    config: &CliConfig,
    _global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let paths = if args.paths.is_empty() {
        vec![resolve_definition_folder(config, None)]
    } else {
        args.paths
    };
    let files = discover_definition_files(&paths)?;
    let registry = Registry::new();

    let mut failed = 0usize;
    let mut results: Vec<serde_json::Value> = Vec::new();

    for file in &files {
        let filename = file.display().to_string();
        match check_file(&registry, file) {
            Ok(checked) => match output.mode {
                OutputMode::Json => results.push(serde_json::json!({
                    "file": filename,
                    "definition": checked.name,
                    "entities": checked.entities,
                    "keys": checked.keys,
                    "errors": [],
                })),
                OutputMode::Human => output.status(&format!(
                    "  {filename} .... {} ({} entities, {} keys)",
                    checked.name, checked.entities, checked.keys
                )),
                OutputMode::Plain => {}
            },
            Err(error) => {
                failed += 1;
                let error = CliError::from_registry(error);
                match output.mode {
                    OutputMode::Human => output.print_error(&error),
                    OutputMode::Json => results.push(serde_json::json!({
                        "file": filename,
                        "errors": [error.to_json()],
                    })),
                    OutputMode::Plain => eprintln!("{filename}\terror\t{error}"),
                }
            }
        }
    }

    match output.mode {
        OutputMode::Human => {
            let summary = format!("{} files checked, {failed} failed", files.len());
            if failed > 0 {
                output.warn(&summary);
            } else {
                output.success(&summary);
            }
        }
        OutputMode::Json => output.print_json(&serde_json::json!({
            "files": files.len(),
            "failed": failed,
            "results": results,
        })),
        OutputMode::Plain => println!("{}\t{failed}", files.len()),
    }

    if failed > 0 {
        Err(CliError::CheckFailed {
            failed,
            total: files.len(),
        })
    } else {
        Ok(())
    }
}

fn check_file(registry: &Registry, file: &Path) -> Result<Checked, RegistryError> {
    let item = registry.load(file)?;
    let enterprise = item.instance(&[])?.create();
    Ok(Checked {
        name: item.metadata().name.clone(),
        entities: enterprise.entities().len(),
        keys: enterprise.keys().len(),
    })
}

/// Discover .definition files from a list of paths.
///
/// Paths can be files (used directly) or directories (searched recursively
/// for `**/*.definition`).
fn discover_definition_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = format!(
                "{}/**/*.{DEFINITION_EXTENSION}",
                glob::Pattern::escape(&path.to_string_lossy())
            );
            let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
            for entry in entries {
                let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                files.push(entry);
            }
        } else {
            return Err(CliError::NoDefinitionFiles { path: path.clone() });
        }
    }

    if files.is_empty() {
        let display_path = paths
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("definitions/"));
        return Err(CliError::NoDefinitionFiles { path: display_path });
    }

    files.sort();
    files.dedup();
    Ok(files)
}
