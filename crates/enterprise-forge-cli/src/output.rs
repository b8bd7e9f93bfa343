use console::{Style, Term};

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;

/// How command results and messages are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Styled messages on stderr, results on stdout.
    Human,
    /// One JSON document on stdout; errors and warnings as JSON on stderr.
    Json,
    /// Tab-separated lines for scripts.
    Plain,
}

impl OutputMode {
    /// Maps the `--format` value; clap has already restricted it.
    pub fn from_format(format: &str) -> Self {
        match format {
            "json" => Self::Json,
            "plain" => Self::Plain,
            _ => Self::Human,
        }
    }
}

/// Where every message of a command run goes.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        Self {
            mode: OutputMode::from_format(&global.format),
            quiet: global.quiet,
            use_color: !global.no_color && console::colors_enabled_stderr(),
        }
    }

    /// Human mode with chatter allowed.
    fn chatty(&self) -> bool {
        self.mode == OutputMode::Human && !self.quiet
    }

    fn label(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// A progress line such as `  wrote generated/Customer.cs`.
    pub fn status(&self, msg: &str) {
        if self.chatty() {
            eprintln!("{msg}");
        }
    }

    /// The closing summary of a successful command.
    pub fn success(&self, msg: &str) {
        if self.chatty() {
            eprintln!("{} {msg}", self.label("ok", Style::new().green().bold()));
        }
    }

    /// A problem that does not fail the command, such as an unloadable unit
    /// in `list`.
    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {msg}", self.label("warning:", Style::new().yellow().bold()));
            }
            OutputMode::Json => eprintln!("{}", serde_json::json!({ "warning": msg })),
            OutputMode::Plain => eprintln!("warning\t{msg}"),
        }
    }

    /// Reports a failure. Always printed, even when quiet.
    ///
    /// In human mode a parse failure is rendered as a source snippet with
    /// the offending position underlined.
    pub fn print_error(&self, err: &CliError) {
        match (self.mode, err) {
            (
                OutputMode::Human,
                CliError::Parse {
                    error,
                    source_text,
                    file,
                },
            ) => {
                let report = render_diagnostic(error, source_text, &file.display().to_string());
                eprintln!("{report:?}");
            }
            (OutputMode::Human, _) => {
                eprintln!("{} {err}", self.label("error:", Style::new().red().bold()));
            }
            (OutputMode::Json, _) => eprintln!("{}", err.to_json()),
            (OutputMode::Plain, _) => eprintln!("error\t{err}"),
        }
    }

    /// Writes a command's JSON result to stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(text) = serde_json::to_string_pretty(value) {
            println!("{text}");
        }
    }

    /// Spinners only make sense for a person watching a terminal.
    pub fn show_progress(&self) -> bool {
        self.chatty() && Term::stderr().is_term()
    }
}
