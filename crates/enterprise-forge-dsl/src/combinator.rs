//! Parsing primitives shared by the comment and document grammars.
//!
//! Everything here is a plain `nom` parser over `&str` using
//! [`GrammarError`], so these compose freely with `nom`'s own `alt`,
//! `many0`, `delimited` and friends.

use nom::character::complete::{char, multispace0};
use nom::error::ParseError as _;
use nom::IResult;

use crate::error::{quote, GrammarError, ParseError};

/// Result type of every parser in this crate.
pub type PResult<'a, T> = IResult<&'a str, T, GrammarError<'a>>;

/// Matches `text` exactly, reporting it by name when it is missing.
pub fn literal<'a, 's>(text: &'s str) -> impl Fn(&'a str) -> PResult<'a, &'a str> + 's {
    move |input: &'a str| match input.strip_prefix(text) {
        Some(rest) => Ok((rest, &input[..text.len()])),
        None => Err(nom::Err::Error(GrammarError::expected(input, quote(text)))),
    }
}

/// Optional whitespace (spaces, tabs, carriage returns, newlines).
pub fn ws(input: &str) -> PResult<'_, &str> {
    multispace0(input)
}

/// Succeeds only when no input remains.
pub fn end_of_input(input: &str) -> PResult<'_, ()> {
    if input.is_empty() {
        Ok((input, ()))
    } else {
        Err(nom::Err::Error(GrammarError::expected(input, "end of input")))
    }
}

/// Runs `parser` only while `depth` has not exceeded `limit`.
///
/// Exceeding the limit is a hard failure so that hostile inputs cannot
/// exhaust the stack through recursive rules.
pub fn bounded<'a, T, P>(depth: usize, limit: usize, mut parser: P) -> impl FnMut(&'a str) -> PResult<'a, T>
where
    P: FnMut(&'a str) -> PResult<'a, T>,
{
    move |input: &'a str| {
        if depth > limit {
            return Err(nom::Err::Failure(
                GrammarError::from_error_kind(input, nom::error::ErrorKind::TooLarge)
                    .with_message(format!("nesting deeper than {limit} levels")),
            ));
        }
        parser(input)
    }
}

/// `open ws (item ws (sep ws item ws)*)? close`
///
/// Zero-or-more repetition with a separator between a pair of brackets.
/// Unlike `separated_list0`, a failing item is reported rather than
/// swallowed: `["a",]` fails at the position after the comma.
pub fn separated<'a, T, P>(
    open: char,
    mut item: P,
    sep: char,
    close: char,
) -> impl FnMut(&'a str) -> PResult<'a, Vec<T>>
where
    P: FnMut(&'a str) -> PResult<'a, T>,
{
    move |input: &'a str| {
        let (input, _) = char(open)(input)?;
        let (mut rest, _) = ws(input)?;

        if let Ok((after, _)) = char::<_, GrammarError<'a>>(close)(rest) {
            return Ok((after, Vec::new()));
        }

        let mut items = Vec::new();
        loop {
            let (after_item, value) = match item(rest) {
                Ok(ok) => ok,
                // The list could also have been empty here.
                Err(nom::Err::Error(e)) if items.is_empty() => {
                    return Err(nom::Err::Error(e.or(GrammarError::from_char(rest, close))));
                }
                Err(e) => return Err(e),
            };
            items.push(value);

            let (after_ws, _) = ws(after_item)?;
            match char::<_, GrammarError<'a>>(sep)(after_ws) {
                Ok((after_sep, _)) => {
                    rest = ws(after_sep)?.0;
                }
                Err(nom::Err::Error(sep_err)) => {
                    return match char::<_, GrammarError<'a>>(close)(after_ws) {
                        Ok((after_close, _)) => Ok((after_close, items)),
                        Err(nom::Err::Error(close_err)) => {
                            Err(nom::Err::Error(sep_err.or(close_err)))
                        }
                        Err(e) => Err(e),
                    };
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Runs `parser` on `source`, returning the unconsumed rest and the value.
///
/// Failures are converted to a positioned [`ParseError`].
pub fn run<'a, T, P>(source: &'a str, mut parser: P) -> Result<(&'a str, T), ParseError>
where
    P: FnMut(&'a str) -> PResult<'a, T>,
{
    parser(source).map_err(|e| match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.into_parse_error(source),
        // Only streaming parsers report Incomplete; treat it as running out of input.
        nom::Err::Incomplete(_) => {
            GrammarError::expected(&source[source.len()..], "more input").into_parse_error(source)
        }
    })
}
