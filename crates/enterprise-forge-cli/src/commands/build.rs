use enterprise_forge_codegen::{compile, CompileReport};
use enterprise_forge_registry::Registry;

use crate::cli::{BuildArgs, GlobalOpts};
use crate::config::{resolve_settings, CliConfig};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};
use crate::progress;
use crate::writer::{DryRunWriter, FsArtifactWriter};

/// Run the `build` command: compile one definition into source files.
pub fn run(
    args: BuildArgs,
    config: &CliConfig,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let settings = resolve_settings(config, global, &args)?;
    let registry = Registry::new();

    let spinner = output
        .show_progress()
        .then(|| progress::create_spinner(&format!("Compiling {}...", settings.definition_name)));

    let result = if args.dry_run {
        compile(&settings, &registry, &DryRunWriter)
    } else {
        compile(&settings, &registry, &FsArtifactWriter)
    };

    let report = match result {
        Ok(report) => {
            if let Some(sp) = &spinner {
                progress::finish_spinner(sp);
            }
            report
        }
        Err(e) => {
            if let Some(sp) = &spinner {
                progress::finish_spinner_error(sp, &e.to_string());
            }
            return Err(CliError::from_compile(e));
        }
    };

    print_report(&report, args.dry_run, output);
    Ok(())
}

fn print_report(report: &CompileReport, dry_run: bool, output: &OutputContext) {
    let verb = if dry_run { "would write" } else { "wrote" };
    match output.mode {
        OutputMode::Human => {
            for path in &report.artifacts {
                output.status(&format!("  {verb} {}", path.display()));
            }
            output.success(&format!(
                "{}: {} entities, {} keys, {} files {}",
                report.enterprise,
                report.enterprise.entities().len(),
                report.enterprise.keys().len(),
                report.artifacts.len(),
                if dry_run { "planned" } else { "written" },
            ));
        }
        OutputMode::Json => {
            let artifacts: Vec<String> = report
                .artifacts
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            output.print_json(&serde_json::json!({
                "enterprise": report.enterprise,
                "artifacts": artifacts,
                "dry_run": dry_run,
            }));
        }
        OutputMode::Plain => {
            for path in &report.artifacts {
                println!("{verb}\t{}", path.display());
            }
        }
    }
}
