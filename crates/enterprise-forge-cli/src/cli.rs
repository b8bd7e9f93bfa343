use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Compiles enterprise definitions into C# domain types.
///
/// An enterprise definition names a business domain, its entities and its
/// entity keys. EnterpriseForge finds a definition by name in a folder of
/// `.definition` files and generates one class per entity and one sealed
/// record per key.
#[derive(Parser)]
#[command(
    name = "enterprise-forge",
    version,
    about = "Compile enterprise definitions into C# domain types",
    after_help = "Use 'enterprise-forge <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: ENTERPRISE_FORGE_CONFIG]
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "ENTERPRISE_FORGE_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Write log events to this file instead of stderr [env: ENTERPRISE_FORGE_LOG_FILE]
    #[arg(long = "log-file", global = true, env = "ENTERPRISE_FORGE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a definition into source files
    Build(BuildArgs),

    /// List the definitions in a folder
    List(ListArgs),

    /// Parse and validate .definition files
    Check(CheckArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `enterprise-forge build`.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Name of the definition to compile (default: `build.definition` from config)
    pub name: Option<String>,

    /// Folder searched for .definition files (default: definitions/)
    #[arg(short = 'd', long = "definitions")]
    pub definitions: Option<PathBuf>,

    /// Folder receiving generated files (default: generated/)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output language
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// Namespace for generated code (default: Domain)
    #[arg(short = 'n', long = "namespace")]
    pub namespace: Option<String>,

    /// Show what would be written without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Arguments for `enterprise-forge list`.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Folder searched for .definition files (default: definitions/)
    #[arg(short = 'd', long = "definitions")]
    pub definitions: Option<PathBuf>,
}

/// Arguments for `enterprise-forge check`.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Definition files or directories to check (default: the definitions folder)
    pub paths: Vec<PathBuf>,
}

/// Arguments for `enterprise-forge completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
