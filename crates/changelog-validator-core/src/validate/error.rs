//! Error types for changelog validation.
//!
//! This module defines the validation errors reported for a changelog and
//! the result type that collects them.

use super::grammar::Expectation;
use crate::parse::{HeaderField, HeaderFields, LineClass};
use serde::Serialize;
use thiserror::Error;

/// The severity of a validation issue.
///
/// Every issue makes a changelog invalid; severity only lets callers weigh
/// them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A softer defect, such as a header missing one of its fields.
    Warning,
    /// A structural defect.
    Error,
}

fn join_expected(expected: &[Expectation]) -> String {
    expected
        .iter()
        .map(Expectation::describe)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A validation error found in a changelog.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    /// A recognized line appeared where its class is not allowed.
    #[error("Found unexpected {found} at line {line_number}, expected {}", join_expected(.expected))]
    UnexpectedLineClass {
        /// The class of the offending line.
        found: LineClass,
        /// What the grammar allowed at this point.
        expected: Vec<Expectation>,
        /// The line number (1-based).
        line_number: usize,
        /// The offending line.
        raw_line: String,
    },

    /// A line starting with the header sigil does not have the header shape.
    #[error("Invalid header at line {line_number}")]
    MalformedHeader {
        /// The line number (1-based).
        line_number: usize,
        /// The offending line.
        raw_line: String,
    },

    /// A header has the right shape but lacks a required field.
    #[error("Invalid header at line {line_number}, maybe missing {field_name}")]
    MissingHeaderField {
        /// The field that is absent.
        field_name: HeaderField,
        /// The line number (1-based).
        line_number: usize,
        /// The offending line.
        raw_line: String,
    },

    /// The header date is not a valid calendar date.
    #[error("Invalid date at line {line_number}")]
    InvalidDate {
        /// The line number (1-based).
        line_number: usize,
        /// The offending line.
        raw_line: String,
    },

    /// The line matches none of the known line classes.
    #[error("Found unexpected garbage at line {line_number}")]
    UnrecognizedLine {
        /// The line number (1-based).
        line_number: usize,
        /// The offending line.
        raw_line: String,
    },
}

impl ValidationError {
    /// Creates an unexpected line class error.
    pub fn unexpected_line_class(
        found: LineClass,
        expected: &[Expectation],
        line_number: usize,
        raw_line: impl Into<String>,
    ) -> Self {
        Self::UnexpectedLineClass {
            found,
            expected: expected.to_vec(),
            line_number,
            raw_line: raw_line.into(),
        }
    }

    /// Creates a malformed header error.
    pub fn malformed_header(line_number: usize, raw_line: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line_number,
            raw_line: raw_line.into(),
        }
    }

    /// Creates a missing header field error.
    pub fn missing_header_field(
        field_name: HeaderField,
        line_number: usize,
        raw_line: impl Into<String>,
    ) -> Self {
        Self::MissingHeaderField {
            field_name,
            line_number,
            raw_line: raw_line.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(line_number: usize, raw_line: impl Into<String>) -> Self {
        Self::InvalidDate {
            line_number,
            raw_line: raw_line.into(),
        }
    }

    /// Creates an unrecognized line error.
    pub fn unrecognized_line(line_number: usize, raw_line: impl Into<String>) -> Self {
        Self::UnrecognizedLine {
            line_number,
            raw_line: raw_line.into(),
        }
    }

    /// Returns the line number where this error occurred (1-based).
    pub fn line(&self) -> usize {
        match self {
            ValidationError::UnexpectedLineClass { line_number, .. } => *line_number,
            ValidationError::MalformedHeader { line_number, .. } => *line_number,
            ValidationError::MissingHeaderField { line_number, .. } => *line_number,
            ValidationError::InvalidDate { line_number, .. } => *line_number,
            ValidationError::UnrecognizedLine { line_number, .. } => *line_number,
        }
    }

    /// Returns the text of the offending line.
    pub fn raw_line(&self) -> &str {
        match self {
            ValidationError::UnexpectedLineClass { raw_line, .. } => raw_line,
            ValidationError::MalformedHeader { raw_line, .. } => raw_line,
            ValidationError::MissingHeaderField { raw_line, .. } => raw_line,
            ValidationError::InvalidDate { raw_line, .. } => raw_line,
            ValidationError::UnrecognizedLine { raw_line, .. } => raw_line,
        }
    }

    /// Returns the severity of this error.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::UnexpectedLineClass { .. } => Severity::Error,
            ValidationError::MalformedHeader { .. } => Severity::Error,
            ValidationError::MissingHeaderField { .. } => Severity::Warning,
            ValidationError::InvalidDate { .. } => Severity::Error,
            ValidationError::UnrecognizedLine { .. } => Severity::Error,
        }
    }
}

/// The result of validating a changelog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// All validation errors found, in line order.
    pub errors: Vec<ValidationError>,
    /// Fields of the first line, when it has the header shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    first_header: Option<HeaderFields>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation result with the given errors.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            errors,
            first_header: None,
        }
    }

    /// Returns true if validation passed with no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns only errors (not warnings).
    pub fn errors_only(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity() == Severity::Error)
    }

    /// Returns only warnings.
    pub fn warnings_only(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity() == Severity::Warning)
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records the fields of the first header line.
    pub(crate) fn set_first_header(&mut self, fields: HeaderFields) {
        self.first_header = Some(fields);
    }

    /// Returns the fields of the first header line if the changelog is valid.
    pub fn header(&self) -> Option<&HeaderFields> {
        if self.is_ok() {
            self.first_header.as_ref()
        } else {
            None
        }
    }

    /// Returns the version of the first header line if the changelog is valid.
    pub fn version(&self) -> Option<&str> {
        self.header().and_then(|fields| fields.get(HeaderField::Version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "* Wed Aug 10 2011 Jane";

    #[test]
    fn unexpected_line_class_message() {
        let error = ValidationError::unexpected_line_class(
            LineClass::Blank,
            &[Expectation::Body],
            2,
            "",
        );
        assert_eq!(
            error.to_string(),
            "Found unexpected blank at line 2, expected body"
        );
        assert_eq!(error.line(), 2);
        assert_eq!(error.severity(), Severity::Error);
    }

    #[test]
    fn unexpected_line_class_lists_all_expectations() {
        let error = ValidationError::unexpected_line_class(
            LineClass::Body,
            &[Expectation::EndOfInput, Expectation::Header, Expectation::Blank],
            7,
            "- late",
        );
        assert!(error.to_string().ends_with("expected EOF, header, blank"));
    }

    #[test]
    fn missing_header_field_message() {
        let error = ValidationError::missing_header_field(HeaderField::Email, 1, LINE);
        assert_eq!(
            error.to_string(),
            "Invalid header at line 1, maybe missing email"
        );
        assert_eq!(error.severity(), Severity::Warning);
        assert_eq!(error.raw_line(), LINE);
    }

    #[test]
    fn header_and_date_messages() {
        assert_eq!(
            ValidationError::malformed_header(3, "*bad").to_string(),
            "Invalid header at line 3"
        );
        assert_eq!(
            ValidationError::invalid_date(4, LINE).to_string(),
            "Invalid date at line 4"
        );
        assert_eq!(
            ValidationError::unrecognized_line(5, "junk").to_string(),
            "Found unexpected garbage at line 5"
        );
    }

    #[test]
    fn serializes_with_type_tag() {
        let error = ValidationError::missing_header_field(HeaderField::Version, 1, LINE);
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["type"], "missing_header_field");
        assert_eq!(json["field_name"], "version");
        assert_eq!(json["line_number"], 1);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn result_filters_by_severity() {
        let result = ValidationResult::with_errors(vec![
            ValidationError::malformed_header(1, "*bad"),
            ValidationError::missing_header_field(HeaderField::Email, 2, LINE),
        ]);
        assert!(result.has_errors());
        assert_eq!(result.errors_only().count(), 1);
        assert_eq!(result.warnings_only().count(), 1);
    }

    #[test]
    fn header_hidden_when_invalid() {
        let fields = HeaderFields {
            version: Some("1.0".into()),
            ..Default::default()
        };

        let mut valid = ValidationResult::new();
        valid.set_first_header(fields.clone());
        assert_eq!(valid.version(), Some("1.0"));

        let mut invalid = ValidationResult::new();
        invalid.set_first_header(fields);
        invalid.add_error(ValidationError::unrecognized_line(2, "junk"));
        assert!(invalid.header().is_none());
        assert!(invalid.version().is_none());
    }
}
