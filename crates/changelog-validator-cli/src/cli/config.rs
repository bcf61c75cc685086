//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types
//! and maps validation outcomes to process exit codes.

use crate::cli::input::Source;
use crate::cli::{Args, FailureLevel};
use changelog_validator_core::parse::InputError;
use changelog_validator_core::validate::checks::CheckConfig;
use thiserror::Error;

/// Errors that can occur during configuration or while reading input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Failed to read a changelog.
    #[error("failed to read changelog '{path}': {error}")]
    Read {
        /// The changelog that could not be read.
        path: String,
        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// A changelog is not text.
    #[error("failed to read changelog '{path}': {error}")]
    NotText {
        /// The offending changelog.
        path: String,
        /// The decoding error.
        #[source]
        error: InputError,
    },

    /// A validation task did not complete.
    #[error("validation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Validation passed successfully.
    Success = 0,
    /// Application startup failed (wrong configuration or unreadable input).
    StartupFailure = 1,
    /// Application terminated by signal (SIGINT/SIGTERM).
    Terminated = 2,
    /// Validation failed (checks found issues).
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for running the validator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Changelogs to validate, in argument order.
    pub sources: Vec<Source>,
    /// Configuration for the check runner.
    pub check_config: CheckConfig,
    /// Failure level for determining exit code.
    pub failure_level: FailureLevel,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.max_errors == 0 {
            return Err(ConfigError::Invalid(
                "--max-errors must be at least 1".to_string(),
            ));
        }

        let sources: Vec<Source> = args.files.iter().map(|p| Source::from_arg(p)).collect();
        if sources.iter().filter(|s| **s == Source::Stdin).count() > 1 {
            return Err(ConfigError::Invalid(
                "stdin ('-') can only be given once".to_string(),
            ));
        }
        for source in &sources {
            if let Source::File(path) = source {
                if !path.is_file() {
                    return Err(ConfigError::Invalid(format!(
                        "changelog '{}' does not exist or is not a file",
                        path.display()
                    )));
                }
            }
        }

        let mut check_config = CheckConfig::new()
            .with_max_errors(args.max_errors)
            .with_strict(args.strict);

        if let Some(ref version) = args.declared_version {
            let version = version.trim();
            if version.is_empty() {
                return Err(ConfigError::Invalid(
                    "--declared-version must not be empty".to_string(),
                ));
            }
            check_config = check_config.with_declared_version(version);
        }

        Ok(Self {
            sources,
            check_config,
            failure_level: args.check_failure_level,
            json_output: args.json,
        })
    }

    /// Determines the exit code based on validation results.
    pub fn exit_code_for_results(&self, has_errors: bool, has_warnings: bool) -> ExitCode {
        if has_errors {
            return ExitCode::ValidationFailed;
        }

        match self.failure_level {
            FailureLevel::Warning if has_warnings => ExitCode::ValidationFailed,
            _ => ExitCode::Success,
        }
    }
}
