//! Version consistency check.
//!
//! Compares the version of the newest changelog entry with the version the
//! package declares. Only meaningful for a valid changelog.

use super::{Check, CheckContext, CheckOutcome};
use crate::validate::check_version_match;

/// A check that the newest changelog version matches the declared version.
#[derive(Debug, Clone, Default)]
pub struct VersionCheck;

impl VersionCheck {
    /// Creates a new version check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for VersionCheck {
    fn name(&self) -> &'static str {
        "version"
    }

    fn run(&self, ctx: &CheckContext) -> CheckOutcome {
        let Some(declared) = ctx.config.declared_version.as_deref() else {
            return CheckOutcome::skipped("no declared version configured");
        };
        if ctx.validation.has_errors() {
            return CheckOutcome::skipped("changelog is not valid");
        }
        let Some(version) = ctx.validation.version() else {
            return CheckOutcome::skipped("changelog has no header");
        };

        match check_version_match(version, declared) {
            Ok(()) => CheckOutcome::Passed,
            Err(mismatch) => CheckOutcome::failed(mismatch.to_string()),
        }
    }
}
