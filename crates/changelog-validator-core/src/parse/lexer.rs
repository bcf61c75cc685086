//! Lexer and token parsers for changelog lines.
//!
//! This module contains nom-based parsers for the individual pieces of a
//! changelog line: the header sigil, the date phrase, the email, the
//! version separator and the trailing version token.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{eof, opt, recognize},
};

/// Characters that make up a date word (letters, digits, underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parses one or more literal spaces.
///
/// Tabs are not accepted between header tokens.
pub fn spaces1(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c == ' ')(input)
}

/// Parses zero or more literal spaces.
pub fn spaces0(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ')(input)
}

/// Parses a single date word.
pub fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

/// Parses the `*` sigil and the spaces that must follow it.
pub fn header_sigil(input: &str) -> IResult<&str, &str> {
    (char('*'), spaces1).map(|(_, spaces)| spaces).parse(input)
}

/// Parses the four-word date phrase of a header, e.g. `Wed Aug 10 2011`.
pub fn date_phrase(input: &str) -> IResult<&str, &str> {
    recognize((word, spaces1, word, spaces1, word, spaces1, word)).parse(input)
}

/// Parses the single space that terminates the date phrase.
pub fn date_terminator(input: &str) -> IResult<&str, char> {
    char(' ')(input)
}

/// Parses the optional gap between author and email.
pub fn author_gap(input: &str) -> IResult<&str, &str> {
    recognize(char(' ')).parse(input)
}

/// Parses an email enclosed in angle brackets, brackets included.
pub fn email(input: &str) -> IResult<&str, &str> {
    recognize((char('<'), take_while1(|c: char| c != '>'), char('>'))).parse(input)
}

/// Parses the version separator: optional spaces followed by `-`.
pub fn version_separator(input: &str) -> IResult<&str, &str> {
    recognize((spaces0, char('-'))).parse(input)
}

/// Parses the end of a header: an optional version token surrounded by
/// optional spaces, then end of line.
pub fn version_tail(input: &str) -> IResult<&str, Option<&str>> {
    (spaces0, opt(take_while1(|c: char| c != ' ')), spaces0, eof)
        .map(|(_, version, _, _)| version)
        .parse(input)
}

/// Returns true if the line starts with a bullet followed by text.
pub fn is_body_line(line: &str) -> bool {
    line.strip_prefix('-')
        .is_some_and(|rest| !rest.trim_start().is_empty())
}

/// Returns true if the line is indented.
///
/// Indented lines without any further text (e.g. a lone tab) still count.
pub fn is_indented_line(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_sigil_requires_space() {
        assert!(header_sigil("* Wed").is_ok());
        assert!(header_sigil("*   Wed").is_ok());
        assert!(header_sigil("*Wed").is_err());
        assert!(header_sigil("*\tWed").is_err());
    }

    #[test]
    fn date_phrase_takes_four_words() {
        let (rest, date) = date_phrase("Wed Aug 10 2011 Jane").unwrap();
        assert_eq!(date, "Wed Aug 10 2011");
        assert_eq!(rest, " Jane");
    }

    #[test]
    fn date_phrase_allows_repeated_spaces() {
        let (_, date) = date_phrase("Wed  Aug  1 2011 ").unwrap();
        assert_eq!(date, "Wed  Aug  1 2011");
    }

    #[test]
    fn date_phrase_rejects_three_words() {
        assert!(date_phrase("Wed Aug 10").is_err());
    }

    #[test]
    fn email_keeps_brackets() {
        let (rest, email) = email("<a@b.com> - 1.0").unwrap();
        assert_eq!(email, "<a@b.com>");
        assert_eq!(rest, " - 1.0");
    }

    #[test]
    fn email_must_not_be_empty() {
        assert!(email("<>").is_err());
        assert!(email("<unterminated").is_err());
    }

    #[test]
    fn version_separator_with_and_without_spaces() {
        assert_eq!(version_separator(" - 1.0").unwrap(), (" 1.0", " -"));
        assert_eq!(version_separator("-1.0").unwrap(), ("1.0", "-"));
        assert!(version_separator(" 1.0").is_err());
    }

    #[test]
    fn version_tail_variants() {
        assert_eq!(version_tail(" 0.6.1").unwrap().1, Some("0.6.1"));
        assert_eq!(version_tail("0.6.1-2  ").unwrap().1, Some("0.6.1-2"));
        assert_eq!(version_tail("   ").unwrap().1, None);
        assert_eq!(version_tail("").unwrap().1, None);
        assert!(version_tail(" 0.6.1 extra").is_err());
    }

    #[test]
    fn body_line_detection() {
        assert!(is_body_line("- fixed a bug"));
        assert!(is_body_line("-fixed a bug"));
        assert!(is_body_line("-\tfixed"));
        assert!(!is_body_line("-"));
        assert!(!is_body_line("-   "));
        assert!(!is_body_line(" - indented"));
    }

    #[test]
    fn indented_line_detection() {
        assert!(is_indented_line("  more text"));
        assert!(is_indented_line("\t"));
        assert!(!is_indented_line("text"));
        assert!(!is_indented_line(""));
    }
}
