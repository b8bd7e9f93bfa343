use std::collections::BTreeMap;

use nom::branch::alt;
use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::{delimited, terminated};

use crate::combinator::{bounded, end_of_input, run, separated, ws, PResult};
use crate::comment::skip_trivia;
use crate::error::{GrammarError, ParseError};
use crate::json::Json;

/// How deeply arrays and objects, or nested block comments, may nest.
pub const MAX_DEPTH: usize = 128;

/// document = array | object | string
///
/// Parses one document from the front of `input` and returns the rest.
/// No whitespace is skipped before or after it.
pub fn document(input: &str) -> PResult<'_, Json> {
    document_at(input, 0)
}

fn document_at<'a>(input: &'a str, depth: usize) -> PResult<'a, Json> {
    bounded(
        depth,
        MAX_DEPTH,
        alt((
            map(string, |s: &str| Json::String(s.to_string())),
            |i: &'a str| array(i, depth),
            |i: &'a str| object(i, depth),
        )),
    )(input)
}

/// string = '"' (any char except '"')* '"'
///
/// There are no escape sequences, so a string can never contain a quote.
fn string(input: &str) -> PResult<'_, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"'))(input)
}

/// array = '[' (document (',' document)*)? ']'
fn array<'a>(input: &'a str, depth: usize) -> PResult<'a, Json> {
    map(
        separated('[', |i: &'a str| document_at(i, depth + 1), ',', ']'),
        Json::Array,
    )(input)
}

/// object = '{' (member (',' member)*)? '}'
fn object<'a>(input: &'a str, depth: usize) -> PResult<'a, Json> {
    let (rest, members) = separated('{', |i: &'a str| member(i, depth), ',', '}')(input)?;

    let mut by_key = BTreeMap::new();
    for (key_at, key, value) in members {
        if by_key.contains_key(key) {
            return Err(nom::Err::Failure(
                GrammarError::expected(key_at, "unique key")
                    .with_message(format!("duplicate key \"{key}\"")),
            ));
        }
        by_key.insert(key.to_string(), value);
    }
    Ok((rest, Json::Object(by_key)))
}

/// member = string ':' document
///
/// Also returns the input at the key so duplicates can be reported there.
fn member(input: &str, depth: usize) -> PResult<'_, (&str, &str, Json)> {
    let (rest, key) = terminated(string, ws)(input)?;
    let (rest, _) = terminated(char(':'), ws)(rest)?;
    let (rest, value) = document_at(rest, depth + 1)?;
    Ok((rest, (input, key, value)))
}

/// Parses `text` as exactly one document with nothing before or after it.
pub fn parse_json(text: &str) -> Result<Json, ParseError> {
    run(text, terminated(document, end_of_input)).map(|(_, json)| json)
}

/// Parses a definition source: one document, optionally surrounded by
/// whitespace, `//` line comments and nested `/* */` block comments.
pub fn parse_source(text: &str) -> Result<Json, ParseError> {
    run(
        text,
        delimited(skip_trivia, document, terminated(skip_trivia, end_of_input)),
    )
    .map(|(_, json)| json)
}
