//! Reading changelog text from files or stdin.

use crate::cli::config::ConfigError;
use changelog_validator_core::parse::decode_text;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Where a changelog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

/// Returns true if the argument names stdin.
pub fn is_stdin_arg(path: &Path) -> bool {
    path == Path::new("-")
}

impl Source {
    /// Creates a source from a command-line argument.
    pub fn from_arg(path: &Path) -> Self {
        if is_stdin_arg(path) {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the whole source as UTF-8 text.
pub async fn read_source(source: &Source) -> Result<String, ConfigError> {
    let read = match source {
        Source::Stdin => {
            let mut bytes = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut bytes)
                .await
                .map(|_| bytes)
        }
        Source::File(path) => tokio::fs::read(path).await,
    };

    let bytes = read.map_err(|error| ConfigError::Read {
        path: source.to_string(),
        error,
    })?;

    decode_text(&bytes)
        .map(str::to_owned)
        .map_err(|error| ConfigError::NotText {
            path: source.to_string(),
            error,
        })
}
