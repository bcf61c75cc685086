//! Error types for changelog input.
//!
//! Content problems are never errors at this level; they are collected as
//! validation errors. The only hard failure is input that is not text.

use thiserror::Error;

/// An error that prevents changelog input from being validated at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// The input is not valid UTF-8 text.
    #[error("changelog input is not valid UTF-8 text (invalid byte at offset {valid_up_to})")]
    NotText {
        /// Number of leading bytes that were valid UTF-8.
        valid_up_to: usize,
    },
}

impl From<std::str::Utf8Error> for InputError {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::NotText {
            valid_up_to: error.valid_up_to(),
        }
    }
}

/// Decodes raw bytes as changelog text.
pub fn decode_text(bytes: &[u8]) -> Result<&str, InputError> {
    Ok(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_text() {
        assert_eq!(decode_text(b"- fixed\n").unwrap(), "- fixed\n");
    }

    #[test]
    fn decode_invalid_text() {
        let error = decode_text(b"* Wed\xff").unwrap_err();
        assert_eq!(error, InputError::NotText { valid_up_to: 5 });
        assert!(error.to_string().contains("offset 5"));
    }
}
