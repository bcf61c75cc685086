//! Validation module for changelog entries.
//!
//! This module checks changelog text against the line grammar and the
//! header field rules, collecting every defect found.
//!
//! # Example
//!
//! ```rust
//! use changelog_validator_core::validate::{validate_changelog, ValidationError};
//!
//! let result = validate_changelog("* Wed Aug 10 2011 Jane Doe <jane@example.com> - 0.6.1\n\n");
//! assert!(matches!(
//!     result.errors.as_slice(),
//!     [ValidationError::UnexpectedLineClass { line_number: 2, .. }]
//! ));
//! for error in &result.errors {
//!     eprintln!("{}", error);
//! }
//! ```

pub mod checks;
mod date;
mod error;
mod grammar;
mod validator;
mod version;

// Re-export public types
pub use date::{DATE_FORMAT, is_valid_date, parse_date};
pub use error::{Severity, ValidationError, ValidationResult};
pub use grammar::{Expectation, GrammarState};
pub use validator::{
    ChangelogInput, Validator, ValidatorConfig, validate_changelog, validate_changelog_strict,
};
pub use version::{VersionMismatch, check_version_match, strip_release};
