//! Line grammar for changelog entries.
//!
//! The grammar is a small state machine keyed by the class of the last
//! line seen. It always advances by the actual class of a line, whether or
//! not that class was expected, so that one misplaced line produces one
//! error instead of a cascade.

use crate::parse::LineClass;
use serde::Serialize;
use std::fmt::{self, Display};

/// Something the grammar accepts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// A header line.
    Header,
    /// A blank line.
    Blank,
    /// A body line.
    Body,
    /// A continuation line.
    ContinuationLine,
    /// The end of the input.
    EndOfInput,
}

impl Expectation {
    /// Returns the human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Expectation::Header => "header",
            Expectation::Blank => "blank",
            Expectation::Body => "body",
            Expectation::ContinuationLine => "continuation line",
            Expectation::EndOfInput => "EOF",
        }
    }

    /// Returns true if this expectation is satisfied by a line of `class`.
    pub fn matches(&self, class: LineClass) -> bool {
        matches!(
            (self, class),
            (Expectation::Header, LineClass::Header)
                | (Expectation::Blank, LineClass::Blank)
                | (Expectation::Body, LineClass::Body)
                | (Expectation::ContinuationLine, LineClass::Continuation)
        )
    }
}

impl Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

const EXPECT_INITIAL: &[Expectation] = &[Expectation::Header];
const EXPECT_AFTER_HEADER: &[Expectation] = &[Expectation::Body];
const EXPECT_AFTER_BLANK: &[Expectation] = &[
    Expectation::EndOfInput,
    Expectation::Header,
    Expectation::Blank,
];
const EXPECT_AFTER_BODY: &[Expectation] = &[
    Expectation::Blank,
    Expectation::EndOfInput,
    Expectation::Body,
    Expectation::ContinuationLine,
];

/// Grammar state between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrammarState {
    /// No line seen yet.
    #[default]
    Initial,
    /// Last line was a header.
    AfterHeader,
    /// Last line was blank.
    AfterBlank,
    /// Last line was a body or continuation line.
    AfterBody,
}

impl GrammarState {
    /// Returns what may follow in this state, in reporting order.
    pub fn expected(self) -> &'static [Expectation] {
        match self {
            GrammarState::Initial => EXPECT_INITIAL,
            GrammarState::AfterHeader => EXPECT_AFTER_HEADER,
            GrammarState::AfterBlank => EXPECT_AFTER_BLANK,
            GrammarState::AfterBody => EXPECT_AFTER_BODY,
        }
    }

    /// Returns true if a line of `class` is allowed in this state.
    pub fn accepts(self, class: LineClass) -> bool {
        self.expected().iter().any(|e| e.matches(class))
    }

    /// Returns the state after a line of `class`.
    ///
    /// The transition depends only on the class, not on whether it was
    /// accepted. Garbage leaves the state unchanged.
    pub fn advance(self, class: LineClass) -> GrammarState {
        match class {
            LineClass::Header => GrammarState::AfterHeader,
            LineClass::Blank => GrammarState::AfterBlank,
            LineClass::Body | LineClass::Continuation => GrammarState::AfterBody,
            LineClass::Garbage => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_expects_header() {
        let state = GrammarState::default();
        assert_eq!(state, GrammarState::Initial);
        assert!(state.accepts(LineClass::Header));
        assert!(!state.accepts(LineClass::Blank));
        assert!(!state.accepts(LineClass::Continuation));
    }

    #[test]
    fn header_must_be_followed_by_body() {
        let state = GrammarState::AfterHeader;
        assert_eq!(state.expected(), &[Expectation::Body]);
        assert!(state.accepts(LineClass::Body));
        assert!(!state.accepts(LineClass::Continuation));
        assert!(!state.accepts(LineClass::Blank));
    }

    #[test]
    fn body_and_continuation_are_equivalent() {
        let after_body = GrammarState::Initial.advance(LineClass::Body);
        let after_continuation = GrammarState::Initial.advance(LineClass::Continuation);
        assert_eq!(after_body, after_continuation);
        assert!(after_body.accepts(LineClass::Continuation));
        assert!(after_body.accepts(LineClass::Body));
        assert!(after_body.accepts(LineClass::Blank));
        assert!(!after_body.accepts(LineClass::Header));
    }

    #[test]
    fn blank_allows_header_or_blank() {
        let state = GrammarState::AfterBlank;
        assert!(state.accepts(LineClass::Header));
        assert!(state.accepts(LineClass::Blank));
        assert!(!state.accepts(LineClass::Body));
    }

    #[test]
    fn garbage_is_never_accepted_and_keeps_state() {
        for state in [
            GrammarState::Initial,
            GrammarState::AfterHeader,
            GrammarState::AfterBlank,
            GrammarState::AfterBody,
        ] {
            assert!(!state.accepts(LineClass::Garbage));
            assert_eq!(state.advance(LineClass::Garbage), state);
        }
    }

    #[test]
    fn advance_ignores_acceptance() {
        // A body line before any header still moves to the after-body state.
        assert!(!GrammarState::Initial.accepts(LineClass::Body));
        assert_eq!(
            GrammarState::Initial.advance(LineClass::Body),
            GrammarState::AfterBody
        );
    }

    #[test]
    fn expectation_descriptions() {
        let names: Vec<_> = GrammarState::AfterBody
            .expected()
            .iter()
            .map(Expectation::describe)
            .collect();
        assert_eq!(names, vec!["blank", "EOF", "body", "continuation line"]);
    }
}
