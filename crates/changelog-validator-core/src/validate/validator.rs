//! The changelog validator.
//!
//! Walks the input once, line by line, classifying each line, checking it
//! against the grammar and checking the fields of header lines. Every
//! defect is collected; content problems never abort validation.

use super::date::is_valid_date;
use super::error::{ValidationError, ValidationResult};
use super::grammar::GrammarState;
use crate::parse::{
    ClassifiedLine, HeaderField, InputError, LineClass, classify_lines, decode_text, parse_header,
};
use log::{debug, trace};

/// Configuration options for the validator.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// If true, validation stops after the first line that produced errors
    /// (strict mode). If false, every line is checked (lenient mode).
    pub strict: bool,
}

impl ValidatorConfig {
    /// Creates a new validator config with default settings (lenient mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict mode validator config.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Creates a lenient mode validator config.
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Sets whether validation stops at the first offending line.
    pub fn with_strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }
}

/// Changelog text as handed over by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogInput {
    /// The complete changelog of a package.
    Full(String),
    /// Only the entries relevant to one pending change, newest first.
    Relevant(Vec<String>),
}

impl ChangelogInput {
    /// Returns the text to validate. Relevant entries are joined by newlines.
    pub fn text(&self) -> String {
        match self {
            ChangelogInput::Full(text) => text.clone(),
            ChangelogInput::Relevant(entries) => entries.join("\n"),
        }
    }
}

/// Validates changelog text.
///
/// A validator holds only its configuration; it is cheap to create and may
/// be shared freely between threads.
///
/// # Example
///
/// ```rust
/// use changelog_validator_core::validate::Validator;
///
/// let input = "* Wed Aug 10 2011 Jane Doe <jane@example.com> - 0.6.1\n- Fixed a crash\n";
/// let result = Validator::new().validate(input);
/// assert!(result.is_ok());
/// assert_eq!(result.version(), Some("0.6.1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the validator configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates changelog text and returns every error found.
    pub fn validate(&self, changes: &str) -> ValidationResult {
        debug!(
            "Validating changelog ({} bytes, strict={})",
            changes.len(),
            self.config.strict
        );
        let mut result = ValidationResult::new();
        let mut state = GrammarState::default();

        for line in classify_lines(changes) {
            let errors_before = result.errors.len();
            check_line(&mut state, &line, &mut result);

            let found = result.errors.len() - errors_before;
            if found > 0 {
                debug!("Line {}: {} error(s)", line.number, found);
                if self.config.strict {
                    debug!("Strict mode: stopping at first offending line");
                    break;
                }
            }
        }

        debug!("Validation complete: {} error(s)", result.errors.len());
        result
    }

    /// Validates raw bytes. Fails only if the bytes are not UTF-8 text.
    pub fn validate_bytes(&self, bytes: &[u8]) -> Result<ValidationResult, InputError> {
        let text = decode_text(bytes)?;
        Ok(self.validate(text))
    }

    /// Validates a full or relevant changelog.
    pub fn validate_input(&self, input: &ChangelogInput) -> ValidationResult {
        self.validate(&input.text())
    }
}

/// Checks one line against the grammar and advances the grammar state.
fn check_line(state: &mut GrammarState, line: &ClassifiedLine<'_>, result: &mut ValidationResult) {
    let ClassifiedLine {
        number,
        text,
        class,
    } = *line;

    if class == LineClass::Garbage {
        trace!("Line {}: unrecognized", number);
        result.add_error(ValidationError::unrecognized_line(number, text));
        return;
    }

    if !state.accepts(class) {
        trace!("Line {}: {} not allowed in state {:?}", number, class, state);
        result.add_error(ValidationError::unexpected_line_class(
            class,
            state.expected(),
            number,
            text,
        ));
    }

    if class == LineClass::Header {
        check_header(number, text, result);
    }

    *state = state.advance(class);
}

/// Checks the shape, fields and date of a header line.
fn check_header(number: usize, text: &str, result: &mut ValidationResult) {
    let Some(fields) = parse_header(text) else {
        result.add_error(ValidationError::malformed_header(number, text));
        return;
    };

    for field in fields.missing() {
        result.add_error(ValidationError::missing_header_field(field, number, text));
    }

    if let Some(date) = fields.get(HeaderField::Date) {
        if !is_valid_date(date) {
            result.add_error(ValidationError::invalid_date(number, text));
        }
    }

    if number == 1 {
        result.set_first_header(fields);
    }
}

/// Validates changelog text using the default (lenient) configuration.
pub fn validate_changelog(changes: &str) -> ValidationResult {
    Validator::new().validate(changes)
}

/// Validates changelog text in strict mode, stopping at the first offending line.
pub fn validate_changelog_strict(changes: &str) -> ValidationResult {
    Validator::with_config(ValidatorConfig::strict()).validate(changes)
}
