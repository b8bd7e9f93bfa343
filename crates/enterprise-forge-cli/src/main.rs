mod cli;
mod commands;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod logging;
mod output;
mod progress;
mod writer;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputContext;

fn main() {
    let cli = Cli::parse();
    let output = OutputContext::from_global(&cli.global);

    match run(cli, &output) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}

fn run(cli: Cli, output: &OutputContext) -> Result<(), CliError> {
    let Cli { command, global } = cli;
    if let Commands::Completions(args) = command {
        return commands::completions::run(args);
    }

    let config = config::load_config(global.config.as_deref())?;
    let log_file = config::resolve_log_file(&config, &global);
    logging::init(global.verbose, global.quiet, log_file.as_deref())?;

    match command {
        Commands::Build(args) => commands::build::run(args, &config, &global, output),
        Commands::List(args) => commands::list::run(args, &config, &global, output),
        Commands::Check(args) => commands::check::run(args, &config, &global, output),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
