use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliError;

/// Run the `completions` command: print a completion script to stdout.
///
/// Needs no config, so `main` runs it before loading one.
pub fn run(args: CompletionsArgs) -> Result<(), CliError> {
    write_script(args.shell, &mut io::stdout());
    Ok(())
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        write_script(shell, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bash_script_names_binary_and_subcommands() {
        let bash = script(Shell::Bash);
        assert!(bash.contains("enterprise-forge"));
        assert!(bash.contains("build"));
        assert!(bash.contains("check"));
    }

    #[test]
    fn fish_script_offers_global_flags() {
        assert!(script(Shell::Fish).contains("no-color"));
    }
}
