use enterprise_forge_dsl::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};

/// A diagnostic wrapping a `ParseError` for rich miette rendering.
///
/// Highlights the position the parser reached and lists what it expected
/// there, with a suggestion for the common mistakes.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct DefinitionDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `ParseError` into a miette `DefinitionDiagnostic`.
pub fn parse_error_to_diagnostic(
    error: &ParseError,
    source: &str,
    filename: &str,
) -> DefinitionDiagnostic {
    let offset = error.position.offset.min(source.len());
    let width = source[offset..].chars().next().map_or(0, char::len_utf8);
    let at_end = offset == source.len();

    let message = match (&error.message, at_end) {
        (Some(message), _) => message.clone(),
        (None, true) => "unexpected end of input".to_string(),
        (None, false) => "unexpected input".to_string(),
    };
    let label = if error.expected.is_empty() {
        "here".to_string()
    } else {
        format!("expected {}", error.expected.join(" or "))
    };

    DefinitionDiagnostic {
        src: NamedSource::new(filename, source.to_string()),
        span: (offset, width).into(),
        message,
        label,
        suggestion: suggestion(error),
    }
}

fn suggestion(error: &ParseError) -> Option<String> {
    let message = error.message.as_deref().unwrap_or_default();
    let expects = |label: &str| error.expected.iter().any(|e| e == label);

    if message == "no close" {
        let end = error.expected.first().map_or("the closing marker", String::as_str);
        Some(format!("Close the comment with {end}."))
    } else if message.starts_with("duplicate key") {
        Some("Remove or rename one of the members.".to_string())
    } else if message.starts_with("nesting deeper than") {
        Some("Flatten the document; arrays and objects nest too deeply.".to_string())
    } else if expects("end of input") {
        Some("Only comments may follow the document.".to_string())
    } else {
        None
    }
}

/// Render a parse error for a file using miette.
pub fn render_diagnostic(error: &ParseError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(parse_error_to_diagnostic(error, source, filename))
}
