//! Check traits and runner for changelog quality checks.
//!
//! A check looks at one changelog and either passes, fails with a message,
//! or is skipped. Checks share a [`CheckContext`] that validates the
//! changelog once up front.

mod changelog;
mod version;

pub use changelog::ChangelogCheck;
pub use version::VersionCheck;

use crate::report::MAX_ERRORS;
use crate::validate::{ValidationError, ValidationResult, Validator, ValidatorConfig};
use log::{debug, info};
use serde::Serialize;

/// Configuration options for changelog checks.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Version declared by the package, compared with the changelog version.
    pub declared_version: Option<String>,
    /// Maximum number of errors rendered in a failure message.
    pub max_errors: usize,
    /// Validator settings.
    pub validator: ValidatorConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            declared_version: None,
            max_errors: MAX_ERRORS,
            validator: ValidatorConfig::default(),
        }
    }
}

impl CheckConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declared package version.
    pub fn with_declared_version(mut self, version: impl Into<String>) -> Self {
        self.declared_version = Some(version.into());
        self
    }

    /// Sets the maximum number of rendered errors (at least one).
    pub fn with_max_errors(mut self, max: usize) -> Self {
        self.max_errors = max.max(1);
        self
    }

    /// Sets whether validation stops at the first offending line.
    pub fn with_strict(mut self, value: bool) -> Self {
        self.validator = self.validator.with_strict(value);
        self
    }
}

/// Context provided to checks.
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// The changelog text.
    pub changelog: &'a str,
    /// Configuration options.
    pub config: &'a CheckConfig,
    /// The validation result for `changelog`.
    pub validation: ValidationResult,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context, validating the changelog.
    pub fn new(changelog: &'a str, config: &'a CheckConfig) -> Self {
        let validation = Validator::with_config(config.validator.clone()).validate(changelog);
        Self {
            changelog,
            config,
            validation,
        }
    }
}

/// The outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The check passed.
    Passed,
    /// The check did not apply.
    Skipped {
        /// Why the check was skipped.
        reason: String,
    },
    /// The check failed.
    Failed {
        /// Human-readable failure message.
        message: String,
        /// Validation errors behind the failure, if any.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        errors: Vec<ValidationError>,
    },
}

impl CheckOutcome {
    /// Creates a skipped outcome.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Creates a failed outcome without validation errors.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Returns true if the check failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckOutcome::Failed { .. })
    }
}

/// A changelog check.
pub trait Check: Send + Sync {
    /// Returns the name of this check.
    fn name(&self) -> &'static str;

    /// Runs the check.
    fn run(&self, ctx: &CheckContext) -> CheckOutcome;
}

/// Runs multiple checks and collects their outcomes.
#[derive(Default)]
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Creates a new check runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a check runner with all built-in checks.
    pub fn with_all_checks() -> Self {
        let mut runner = Self::new();
        runner.add_check(ChangelogCheck::new());
        runner.add_check(VersionCheck::new());
        runner
    }

    /// Adds a check.
    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Runs all checks in order and returns their outcomes by name.
    pub fn run(&self, ctx: &CheckContext) -> Vec<(&'static str, CheckOutcome)> {
        info!("Running {} checks", self.checks.len());
        let outcomes: Vec<_> = self
            .checks
            .iter()
            .map(|check| {
                debug!("Running check: {}", check.name());
                let outcome = check.run(ctx);
                debug!("Check '{}': {:?}", check.name(), outcome);
                (check.name(), outcome)
            })
            .collect();

        info!(
            "Checks complete: {} failed",
            outcomes.iter().filter(|(_, o)| o.is_failure()).count()
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "* Wed Aug 10 2011 Jane Doe <jane@example.com> - 0.6.1-1\n- Fixed a crash\n";

    #[test]
    fn check_config_builder() {
        let config = CheckConfig::new()
            .with_declared_version("0.6.1")
            .with_max_errors(0)
            .with_strict(true);

        assert_eq!(config.declared_version.as_deref(), Some("0.6.1"));
        assert_eq!(config.max_errors, 1);
        assert!(config.validator.strict);
    }

    #[test]
    fn check_config_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.max_errors, MAX_ERRORS);
        assert!(config.declared_version.is_none());
    }

    #[test]
    fn check_context_validates_once() {
        let config = CheckConfig::new();
        let ctx = CheckContext::new(VALID, &config);
        assert!(ctx.validation.is_ok());
        assert_eq!(ctx.validation.version(), Some("0.6.1-1"));
    }

    #[test]
    fn check_runner_creation() {
        let runner = CheckRunner::new();
        assert!(runner.checks.is_empty());
    }

    #[test]
    fn check_runner_with_all_checks() {
        let runner = CheckRunner::with_all_checks();
        assert_eq!(runner.checks.len(), 2);

        let config = CheckConfig::new().with_declared_version("0.6.1");
        let ctx = CheckContext::new(VALID, &config);
        let outcomes = runner.run(&ctx);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0], ("changelog", CheckOutcome::Passed));
        assert_eq!(outcomes[1], ("version", CheckOutcome::Passed));
    }

    #[test]
    fn outcome_serializes_with_status() {
        let json = serde_json::to_value(CheckOutcome::failed("boom")).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["message"], "boom");
        assert!(json.get("errors").is_none());
    }
}
