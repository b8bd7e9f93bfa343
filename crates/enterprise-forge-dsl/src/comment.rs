//! Comment skippers.
//!
//! Each skipper consumes one comment and yields `()`. Once the opening
//! marker has matched, a missing closing marker is a hard failure
//! (`no close`) positioned where the input ran out.

use nom::branch::alt;
use nom::character::complete::{anychar, char, multispace1};
use nom::combinator::{opt, value};
use nom::multi::{many0, many_till};

use crate::combinator::{bounded, literal, PResult};
use crate::error::GrammarError;
use crate::parser::MAX_DEPTH;

/// `start` followed by everything up to and including the next newline.
///
/// The comment may also run to the end of input without a newline.
pub fn skip_line_comment<'a, 's>(start: &'s str) -> impl Fn(&'a str) -> PResult<'a, ()> + 's {
    move |input: &'a str| {
        let (rest, _) = literal(start)(input)?;
        let end = rest.find('\n').unwrap_or(rest.len());
        let (rest, _) = opt(char('\n'))(&rest[end..])?;
        Ok((rest, ()))
    }
}

/// `start` followed by everything up to and including the first `end`.
///
/// Not nesting-aware: a second `start` inside the comment is plain text.
pub fn skip_block_comment<'a, 's>(
    start: &'s str,
    end: &'s str,
) -> impl Fn(&'a str) -> PResult<'a, ()> + 's {
    move |input: &'a str| {
        let (rest, _) = literal(start)(input)?;
        match rest.find(end) {
            Some(at) => Ok((&rest[at + end.len()..], ())),
            None => Err(nom::Err::Failure(GrammarError::no_close(
                &rest[rest.len()..],
                end,
            ))),
        }
    }
}

/// Like [`skip_block_comment`], but an inner `start` opens a nested comment
/// that must be closed before the outer one can be.
///
/// Comments may nest at most [`MAX_DEPTH`] levels; an opener past that is a
/// hard failure at the text following it.
pub fn skip_nested_block_comment<'a, 's>(
    start: &'s str,
    end: &'s str,
) -> impl Fn(&'a str) -> PResult<'a, ()> + 's {
    move |input: &'a str| nested_block(input, start, end, 1)
}

fn nested_block<'a>(input: &'a str, start: &str, end: &str, depth: usize) -> PResult<'a, ()> {
    let (rest, _) = literal(start)(input)?;
    let mut body = bounded(
        depth,
        MAX_DEPTH,
        many_till(
            alt((
                |i: &'a str| nested_block(i, start, end, depth + 1),
                value((), anychar),
            )),
            literal(end),
        ),
    );
    match body(rest) {
        Ok((rest, _)) => Ok((rest, ())),
        Err(nom::Err::Error(e)) => {
            let at_end = &e.input()[e.input().len()..];
            Err(nom::Err::Failure(GrammarError::no_close(at_end, end)))
        }
        Err(e) => Err(e),
    }
}

/// Whitespace, `//` line comments and nested `/* */` block comments, in
/// any order and amount (including none).
pub fn skip_trivia(input: &str) -> PResult<'_, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            skip_line_comment("//"),
            skip_nested_block_comment("/*", "*/"),
        ))),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::run;

    #[test]
    fn line_comment_consumes_through_newline() {
        assert_eq!(run("// abc\nREST", skip_line_comment("//")), Ok(("REST", ())));
    }

    #[test]
    fn line_comment_without_newline_runs_to_end() {
        assert_eq!(run("# trailing", skip_line_comment("#")), Ok(("", ())));
    }

    #[test]
    fn line_comment_keeps_next_line_intact() {
        assert_eq!(
            run("--a\r\n--b", skip_line_comment("--")),
            Ok(("--b", ()))
        );
    }

    #[test]
    fn line_comment_requires_start() {
        let err = run("x // y", skip_line_comment("//")).unwrap_err();
        assert_eq!(err.position.offset, 0);
        assert_eq!(err.expected, vec!["\"//\""]);
    }

    #[test]
    fn block_comment_stops_at_first_end() {
        assert_eq!(
            run("/* a /* b */ c */REST", skip_block_comment("/*", "*/")),
            Ok((" c */REST", ()))
        );
    }

    #[test]
    fn block_comment_without_end_is_no_close() {
        let source = "/* never closed";
        let err = run(source, skip_block_comment("/*", "*/")).unwrap_err();
        assert_eq!(err.message.as_deref(), Some("no close"));
        assert_eq!(err.position.offset, source.len());
        assert_eq!(err.expected, vec!["\"*/\""]);
    }

    #[test]
    fn nested_comment_balances_markers() {
        assert_eq!(
            run("/* a /* b */ c */REST", skip_nested_block_comment("/*", "*/")),
            Ok(("REST", ()))
        );
    }

    #[test]
    fn nested_comment_deep_nesting() {
        assert_eq!(
            run("(*1(*2(*3*)2*)1*)!", skip_nested_block_comment("(*", "*)")),
            Ok(("!", ()))
        );
    }

    #[test]
    fn nested_comment_with_unclosed_inner_is_no_close() {
        let source = "/* a /* b */ c";
        let err = run(source, skip_nested_block_comment("/*", "*/")).unwrap_err();
        assert_eq!(err.message.as_deref(), Some("no close"));
        assert_eq!(err.position.offset, source.len());
    }

    #[test]
    fn nested_comment_handles_multibyte_text() {
        assert_eq!(
            run("/* caf\u{e9} \u{2603} */x", skip_nested_block_comment("/*", "*/")),
            Ok(("x", ()))
        );
    }

    #[test]
    fn nested_comment_at_depth_limit_is_accepted() {
        let source = format!("{}{}x", "/*".repeat(MAX_DEPTH), "*/".repeat(MAX_DEPTH));
        assert_eq!(run(&source, skip_nested_block_comment("/*", "*/")), Ok(("x", ())));
    }

    #[test]
    fn nested_comment_past_depth_limit_fails() {
        let source = "/*".repeat(100_000);
        let err = run(&source, skip_nested_block_comment("/*", "*/")).unwrap_err();
        assert_eq!(
            err.message,
            Some(format!("nesting deeper than {MAX_DEPTH} levels"))
        );
        assert_eq!(err.position.offset, 2 * (MAX_DEPTH + 1));
    }

    #[test]
    fn trivia_mixes_whitespace_and_comments() {
        let source = "  // line\n/* block /* nested */ */\n\t{";
        assert_eq!(run(source, skip_trivia), Ok(("{", ())));
    }

    #[test]
    fn trivia_accepts_nothing() {
        assert_eq!(run("{", skip_trivia), Ok(("{", ())));
    }

    #[test]
    fn trivia_propagates_no_close() {
        let err = run("  /* open", skip_trivia).unwrap_err();
        assert_eq!(err.message.as_deref(), Some("no close"));
    }
}
