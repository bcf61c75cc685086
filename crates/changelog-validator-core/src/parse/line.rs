//! Line model for changelog entries.
//!
//! This module defines the line classes a changelog line can fall into
//! and the structured fields extracted from a header line.

use serde::Serialize;
use std::fmt::{self, Display};

/// The class of a single changelog line.
///
/// A class depends only on the text of the line, never on the lines
/// around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    /// An entry header (starts with `*`).
    Header,
    /// An empty line.
    Blank,
    /// A bullet-marked description line (starts with `-`).
    Body,
    /// An indented line extending the previous body line.
    Continuation,
    /// Anything else.
    Garbage,
}

impl LineClass {
    /// Returns the human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            LineClass::Header => "header",
            LineClass::Blank => "blank",
            LineClass::Body => "body",
            LineClass::Continuation => "continuation line",
            LineClass::Garbage => "garbage",
        }
    }
}

impl Display for LineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A named sub-field of a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderField {
    /// The `weekday month day year` phrase.
    Date,
    /// The author name.
    Author,
    /// The `<...>` email address.
    Email,
    /// The gap between author and email.
    Space,
    /// The separator before the version.
    Hyphen,
    /// The trailing version token.
    Version,
}

impl HeaderField {
    /// Fields every header must carry, in reporting order.
    pub const REQUIRED: [HeaderField; 6] = [
        HeaderField::Date,
        HeaderField::Author,
        HeaderField::Email,
        HeaderField::Space,
        HeaderField::Hyphen,
        HeaderField::Version,
    ];

    /// Returns the field name as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            HeaderField::Date => "date",
            HeaderField::Author => "author",
            HeaderField::Email => "email",
            HeaderField::Space => "space",
            HeaderField::Hyphen => "hyphen",
            HeaderField::Version => "version",
        }
    }
}

impl Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields captured from a header line that matched the header shape.
///
/// Captures keep their raw text: `email` includes the angle brackets and
/// `hyphen` includes any spaces before the `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderFields {
    /// The date phrase, e.g. `Wed Aug 10 2011`.
    pub date: Option<String>,
    /// The author name, e.g. `Jane Doe`.
    pub author: Option<String>,
    /// The single space between author and email.
    pub space: Option<String>,
    /// The email, e.g. `<jane@example.com>`.
    pub email: Option<String>,
    /// The version separator, e.g. ` -`.
    pub hyphen: Option<String>,
    /// The version, e.g. `0.6.1-1`.
    pub version: Option<String>,
}

impl HeaderFields {
    /// Returns the captured text of a field, if present.
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        let value = match field {
            HeaderField::Date => &self.date,
            HeaderField::Author => &self.author,
            HeaderField::Email => &self.email,
            HeaderField::Space => &self.space,
            HeaderField::Hyphen => &self.hyphen,
            HeaderField::Version => &self.version,
        };
        value.as_deref().filter(|text| !text.is_empty())
    }

    /// Returns the required fields that are absent, in reporting order.
    pub fn missing(&self) -> impl Iterator<Item = HeaderField> + '_ {
        HeaderField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_none())
    }

    /// Returns true if every required field is present.
    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }

    /// Returns the author with surrounding whitespace removed.
    pub fn author_name(&self) -> Option<&str> {
        self.get(HeaderField::Author).map(str::trim)
    }

    /// Returns the email address without its angle brackets.
    pub fn email_address(&self) -> Option<&str> {
        self.get(HeaderField::Email)
            .map(|email| email.trim_start_matches('<').trim_end_matches('>'))
    }
}

/// A physical line of changelog input together with its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// The line number (1-based).
    pub number: usize,
    /// The line text without its line terminator.
    pub text: &'a str,
    /// The class assigned to the line.
    pub class: LineClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> HeaderFields {
        HeaderFields {
            date: Some("Wed Aug 10 2011".into()),
            author: Some("Jane Doe".into()),
            space: Some(" ".into()),
            email: Some("<jane@example.com>".into()),
            hyphen: Some(" -".into()),
            version: Some("0.6.1".into()),
        }
    }

    #[test]
    fn line_class_descriptions() {
        assert_eq!(LineClass::Header.to_string(), "header");
        assert_eq!(LineClass::Continuation.to_string(), "continuation line");
        assert_eq!(LineClass::Garbage.to_string(), "garbage");
    }

    #[test]
    fn complete_header_has_no_missing_fields() {
        let fields = complete_fields();
        assert!(fields.is_complete());
        assert_eq!(fields.missing().count(), 0);
    }

    #[test]
    fn missing_fields_follow_reporting_order() {
        let fields = HeaderFields {
            date: Some("Wed Aug 10 2011".into()),
            author: Some("Jane Doe".into()),
            ..Default::default()
        };
        let missing: Vec<_> = fields.missing().collect();
        assert_eq!(
            missing,
            vec![
                HeaderField::Email,
                HeaderField::Space,
                HeaderField::Hyphen,
                HeaderField::Version
            ]
        );
    }

    #[test]
    fn empty_capture_counts_as_missing() {
        let fields = HeaderFields {
            version: Some(String::new()),
            ..complete_fields()
        };
        assert_eq!(fields.missing().collect::<Vec<_>>(), vec![HeaderField::Version]);
    }

    #[test]
    fn convenience_accessors_strip_decoration() {
        let fields = HeaderFields {
            author: Some(" Jane Doe ".into()),
            ..complete_fields()
        };
        assert_eq!(fields.author_name(), Some("Jane Doe"));
        assert_eq!(fields.email_address(), Some("jane@example.com"));
    }

    #[test]
    fn header_field_serializes_lowercase() {
        let json = serde_json::to_string(&HeaderField::Email).unwrap();
        assert_eq!(json, "\"email\"");
    }
}
