use std::collections::BTreeSet;
use std::fmt;

use nom::error::{ErrorKind, ParseError as NomParseError};

/// A location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// Computes the position of `offset` within `source`.
    ///
    /// Offsets past the end or inside a multi-byte character are clamped
    /// back to the nearest character boundary.
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A parse failure: where the parser got to and what it expected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Furthest position the parser reached.
    pub position: Position,
    /// Token labels acceptable at `position`, sorted and de-duplicated.
    pub expected: Vec<String>,
    /// Extra detail such as `no close` for an unterminated comment.
    pub message: Option<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message} at {}", self.position)?,
            None => write!(f, "parse error at {}", self.position)?,
        }
        if !self.expected.is_empty() {
            write!(f, ": expected {}", self.expected.join(" or "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The error carried through `nom` while parsing.
///
/// Holds the remaining input at the failure point instead of an offset so
/// that alternatives can be compared by how far they got: the shorter the
/// remaining input, the further the parser reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError<'a> {
    input: &'a str,
    expected: BTreeSet<String>,
    message: Option<String>,
}

impl<'a> GrammarError<'a> {
    /// A failure at `input` where `label` would have been accepted.
    pub fn expected(input: &'a str, label: impl Into<String>) -> Self {
        Self {
            input,
            expected: BTreeSet::from([label.into()]),
            message: None,
        }
    }

    /// A failure for a construct whose closing marker `end` never appears.
    pub fn no_close(input: &'a str, end: &str) -> Self {
        Self::expected(input, quote(end)).with_message("no close")
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The remaining input at the failure point.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Converts to an owned [`ParseError`], positioned within `source`.
    ///
    /// `source` must be the text the failing parser was started on.
    pub fn into_parse_error(self, source: &str) -> ParseError {
        let offset = source.len().saturating_sub(self.input.len());
        ParseError {
            position: Position::locate(source, offset),
            expected: self.expected.into_iter().collect(),
            message: self.message,
        }
    }
}

impl<'a> NomParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        let label = match kind {
            ErrorKind::Eof => "end of input".to_string(),
            ErrorKind::Char => "any character".to_string(),
            ErrorKind::MultiSpace => "whitespace".to_string(),
            other => other.description().to_lowercase(),
        };
        Self::expected(input, label)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: &'a str, c: char) -> Self {
        Self::expected(input, format!("'{c}'"))
    }

    fn or(mut self, other: Self) -> Self {
        match self.input.len().cmp(&other.input.len()) {
            std::cmp::Ordering::Less => self,
            std::cmp::Ordering::Greater => other,
            std::cmp::Ordering::Equal => {
                self.expected.extend(other.expected);
                self.message = self.message.or(other.message);
                self
            }
        }
    }
}

/// Renders a literal token as it appears in expected-token lists.
pub(crate) fn quote(text: &str) -> String {
    format!("\"{text}\"")
}
