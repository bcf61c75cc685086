//! Parser module for changelog entries.
//!
//! This module classifies changelog lines and extracts the structured
//! fields of header lines.
//!
//! # Example
//!
//! ```rust
//! use changelog_validator_core::parse::{classify_lines, LineClass};
//!
//! let input = "* Wed Aug 10 2011 Jane Doe <jane@example.com> - 0.6.1\n- Fixed a crash\n";
//!
//! let classes: Vec<LineClass> = classify_lines(input).map(|line| line.class).collect();
//! assert_eq!(classes, vec![LineClass::Header, LineClass::Body]);
//! ```

mod error;
mod lexer;
mod line;
mod parser;

// Re-export public types
pub use error::{InputError, decode_text};
pub use line::{ClassifiedLine, HeaderField, HeaderFields, LineClass};
pub use parser::{HEADER_SIGIL, classify_line, classify_lines, parse_header};
