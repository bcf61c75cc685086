//! Changelog Validator Core
//!
//! A library for validating RPM-style package changelogs.
//!
//! # Features
//!
//! - **Classifier**: Sort each line into header, blank, body, continuation or garbage
//! - **Header parsing**: Extract date, author, email and version from entry headers
//! - **Grammar**: Check the order of lines with a small state machine
//! - **Lenient Mode**: Keep validating after errors to collect all issues
//! - **Strict Mode**: Stop after the first offending line
//!
//! # Quick Start
//!
//! ```rust
//! use changelog_validator_core::validate::validate_changelog;
//! use changelog_validator_core::report::{render_report, MAX_ERRORS};
//!
//! let changelog = "\
//! * Wed Aug 10 2011 Jane Doe <jane@example.com> - 0.6.1
//! - Fixed a crash on startup
//!   Contributes to JB#1234
//!
//! * Tue Aug 09 2011 Jane Doe <jane@example.com> - 0.6.0
//! - Initial packaging
//! ";
//!
//! let result = validate_changelog(changelog);
//! if result.is_ok() {
//!     println!("Changelog is valid, newest version {:?}", result.version());
//! } else if let Some(report) = render_report(&result.errors, MAX_ERRORS) {
//!     eprintln!("{}", report);
//! }
//! # assert_eq!(result.version(), Some("0.6.1"));
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Line classification and header parsing
//! - [`validate`]: Grammar, date and version validation
//! - [`report`]: Human-readable error reports

pub mod parse;
pub mod report;
pub mod validate;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export commonly used types at the crate root
pub use parse::{HeaderField, HeaderFields, LineClass, classify_line, parse_header};
pub use validate::checks::{Check, CheckConfig, CheckContext, CheckOutcome, CheckRunner};
pub use validate::{
    ValidationError, ValidationResult, Validator, ValidatorConfig, validate_changelog,
};
