//! Changelog format check.

use super::{Check, CheckContext, CheckOutcome};
use crate::report::render_report;

/// A check that the changelog follows the packaging changelog format.
#[derive(Debug, Clone, Default)]
pub struct ChangelogCheck;

impl ChangelogCheck {
    /// Creates a new changelog check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for ChangelogCheck {
    fn name(&self) -> &'static str {
        "changelog"
    }

    fn run(&self, ctx: &CheckContext) -> CheckOutcome {
        match render_report(&ctx.validation.errors, ctx.config.max_errors) {
            None => CheckOutcome::Passed,
            Some(message) => CheckOutcome::Failed {
                message,
                errors: ctx.validation.errors.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::checks::CheckConfig;

    fn run_check(input: &str, config: &CheckConfig) -> CheckOutcome {
        let ctx = CheckContext::new(input, config);
        ChangelogCheck::new().run(&ctx)
    }

    #[test]
    fn valid_changelog() {
        let outcome = run_check(
            "* Wed Aug 10 2011 Jane Doe <jane@example.com> - 0.6.1\n- Fixed a crash\n",
            &CheckConfig::new(),
        );
        assert_eq!(outcome, CheckOutcome::Passed);
    }

    #[test]
    fn invalid_changelog_reports_all_errors() {
        let input = "junk\n".repeat(10);
        let outcome = run_check(&input, &CheckConfig::new().with_max_errors(3));
        match outcome {
            CheckOutcome::Failed { message, errors } => {
                assert!(message.starts_with("Changelog not valid, showing 3 of 10 errors:"));
                assert_eq!(errors.len(), 10);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
