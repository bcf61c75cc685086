//! Line classification and header parsing.
//!
//! This module combines the lexer components to classify complete lines
//! and to extract the structured fields of a header line.

use super::lexer::{
    author_gap, date_phrase, date_terminator, email, header_sigil, is_body_line,
    is_indented_line, version_separator, version_tail,
};
use super::line::{ClassifiedLine, HeaderFields, LineClass};
use log::trace;
use nom::IResult;
use std::iter;

/// The header sigil every header line starts with.
pub const HEADER_SIGIL: char = '*';

/// Classifies a single line (without its line terminator).
///
/// Classes are checked in priority order and the first match wins:
/// header, blank, body, continuation, garbage. A line starting with the
/// sigil is a header even when its shape is wrong; [`parse_header`] decides
/// whether the shape matches.
pub fn classify_line(line: &str) -> LineClass {
    if line.starts_with(HEADER_SIGIL) {
        LineClass::Header
    } else if line.is_empty() {
        LineClass::Blank
    } else if is_body_line(line) {
        LineClass::Body
    } else if is_indented_line(line) {
        LineClass::Continuation
    } else {
        LineClass::Garbage
    }
}

/// Splits input into physical lines and classifies each one.
///
/// Line numbers are 1-based. Both `\n` and `\r\n` terminators are accepted.
pub fn classify_lines(input: &str) -> impl Iterator<Item = ClassifiedLine<'_>> {
    input.lines().enumerate().map(|(idx, text)| {
        let class = classify_line(text);
        trace!("Line {}: classified as {}", idx + 1, class);
        ClassifiedLine {
            number: idx + 1,
            text,
            class,
        }
    })
}

/// Yields the result of applying `parser` first, then the "absent" choice.
///
/// Mirrors an optional group: the present alternative has priority and the
/// absent alternative is the fallback.
fn present_then_absent<'a, O>(
    input: &'a str,
    parser: impl Fn(&'a str) -> IResult<&'a str, O>,
) -> impl Iterator<Item = (&'a str, Option<&'a str>)> {
    let present = parser(input)
        .ok()
        .map(|(rest, _)| (rest, Some(&input[..input.len() - rest.len()])));
    present.into_iter().chain(iter::once((input, None)))
}

/// Fields matched after the author text.
struct Tail<'a> {
    space: Option<&'a str>,
    email: Option<&'a str>,
    hyphen: Option<&'a str>,
    version: Option<&'a str>,
}

/// Matches the part of a header that follows the author text.
fn match_tail(input: &str) -> Option<Tail<'_>> {
    for (after_space, space) in present_then_absent(input, author_gap) {
        for (after_email, email) in present_then_absent(after_space, email) {
            for (after_hyphen, hyphen) in present_then_absent(after_email, version_separator) {
                if let Ok((_, version)) = version_tail(after_hyphen) {
                    return Some(Tail {
                        space,
                        email,
                        hyphen,
                        version,
                    });
                }
            }
        }
    }
    None
}

/// Returns true if a header tail may begin at `offset`.
///
/// A tail opens with the gap, the email or the separator, or else is a
/// lone version token followed only by spaces.
fn can_start_tail(tail: &str, offset: usize, last_inner_space: Option<usize>) -> bool {
    tail.is_empty()
        || tail.starts_with([' ', '<', '-'])
        || last_inner_space.is_none_or(|space| offset > space)
}

/// Parses the fields of a header line.
///
/// Returns `None` when the line does not have the header shape at all:
///
/// ```text
/// * <weekday> <month> <day> <year> [author][ ][<email>][ -][ version]
/// ```
///
/// The author is the shortest text (without `<`) that lets the remainder
/// of the line match; when no author text works the author is absent.
/// A `Some` result may still lack required fields, see
/// [`HeaderFields::missing`].
///
/// # Example
///
/// ```rust
/// use changelog_validator_core::parse::parse_header;
///
/// let fields = parse_header("* Wed Aug 10 2011 Jane Doe <jane@example.com> - 0.6.1").unwrap();
/// assert_eq!(fields.author.as_deref(), Some("Jane Doe"));
/// assert_eq!(fields.version.as_deref(), Some("0.6.1"));
/// assert!(parse_header("*invalid").is_none());
/// ```
pub fn parse_header(line: &str) -> Option<HeaderFields> {
    let (rest, _) = header_sigil(line).ok()?;
    let (rest, date) = date_phrase(rest).ok()?;
    let (rest, _) = date_terminator(rest).ok()?;

    let author_limit = rest.find('<').unwrap_or(rest.len());
    let last_inner_space = rest.trim_end_matches(' ').rfind(' ');
    let author_ends = rest[..author_limit]
        .char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .filter(|&end| can_start_tail(&rest[end..], end, last_inner_space))
        .map(Some)
        .chain(iter::once(None));

    for author_end in author_ends {
        let (author, after_author) = match author_end {
            Some(end) => (Some(&rest[..end]), &rest[end..]),
            None => (None, rest),
        };
        if let Some(tail) = match_tail(after_author) {
            return Some(HeaderFields {
                date: Some(date.to_string()),
                author: author.map(str::to_string),
                space: tail.space.map(str::to_string),
                email: tail.email.map(str::to_string),
                hyphen: tail.hyphen.map(str::to_string),
                version: tail.version.map(str::to_string),
            });
        }
    }

    None
}
