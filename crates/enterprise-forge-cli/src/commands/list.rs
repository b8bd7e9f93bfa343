use enterprise_forge_registry::Registry;

use crate::cli::{GlobalOpts, ListArgs};
use crate::config::{resolve_definition_folder, CliConfig};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `list` command: show every definition in a folder.
///
/// Units that fail to load are reported as warnings and do not fail the
/// command.
pub fn run(
    args: ListArgs,
    config: &CliConfig,
    _global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let folder = resolve_definition_folder(config, args.definitions.as_deref());
    let listing = Registry::new().list(&folder)?;

    for failure in &listing.failures {
        output.warn(&failure.to_string());
    }

    match output.mode {
        OutputMode::Human => {
            for item in &listing.items {
                let metadata = item.metadata();
                println!(
                    "{:<24} v{:<6} {:<10} {}",
                    metadata.name,
                    metadata.version.to_string(),
                    metadata.entry_point,
                    item.file_path().display()
                );
                if !metadata.description.is_empty() {
                    println!("    {}", metadata.description);
                }
            }
            output.success(&format!(
                "{} definitions in {}",
                listing.items.len(),
                folder.display()
            ));
        }
        OutputMode::Json => {
            let items: Vec<serde_json::Value> = listing
                .items
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "definition": item.metadata(),
                        "file": item.file_path().display().to_string(),
                    })
                })
                .collect();
            let failures: Vec<String> = listing.failures.iter().map(|e| e.to_string()).collect();
            output.print_json(&serde_json::json!({
                "folder": folder.display().to_string(),
                "definitions": items,
                "failures": failures,
            }));
        }
        OutputMode::Plain => {
            for item in &listing.items {
                let metadata = item.metadata();
                println!(
                    "{}\t{}\t{}\t{}",
                    metadata.name,
                    metadata.version,
                    metadata.entry_point,
                    item.file_path().display()
                );
            }
        }
    }

    Ok(())
}
