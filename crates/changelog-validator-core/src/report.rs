//! Human-readable changelog reports.
//!
//! Rendering is a presentation concern: the validator itself never limits
//! how many errors it collects, but reports show at most a fixed number.

use crate::validate::ValidationError;

/// Default number of errors shown in a report.
pub const MAX_ERRORS: usize = 8;

/// The packaging guideline that defines the changelog format.
pub const GUIDELINE_URL: &str = "https://wiki.merproject.org/wiki/Packaging_guidelines#Changelogs";

/// Renders one error with its offending line and the guideline reference.
pub fn render_error(error: &ValidationError) -> String {
    let mut out = format!("\n{}\n", error);
    if !error.raw_line().is_empty() {
        out.push_str(error.raw_line());
    }
    out.push_str("\nplease follow ref at ");
    out.push_str(GUIDELINE_URL);
    out
}

/// Renders a report for a failed validation.
///
/// Returns `None` when there are no errors. At most `max_errors` errors are
/// rendered; the summary line states how many were left out.
pub fn render_report(errors: &[ValidationError], max_errors: usize) -> Option<String> {
    if errors.is_empty() {
        return None;
    }

    let showing = errors.len().min(max_errors);
    let rendered: Vec<String> = errors[..showing].iter().map(render_error).collect();

    Some(format!(
        "Changelog not valid, showing {} of {} errors:\n{}",
        showing,
        errors.len(),
        rendered.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garbage(line_number: usize) -> ValidationError {
        ValidationError::unrecognized_line(line_number, "junk")
    }

    #[test]
    fn no_report_without_errors() {
        assert!(render_report(&[], MAX_ERRORS).is_none());
    }

    #[test]
    fn render_error_includes_line_and_reference() {
        let text = render_error(&garbage(3));
        assert!(text.contains("Found unexpected garbage at line 3"));
        assert!(text.contains("\njunk\n"));
        assert!(text.ends_with(GUIDELINE_URL));
    }

    #[test]
    fn render_error_exact_text() {
        assert_eq!(
            render_error(&garbage(3)),
            format!(
                "\nFound unexpected garbage at line 3\njunk\nplease follow ref at {}",
                GUIDELINE_URL
            )
        );
    }

    #[test]
    fn report_is_truncated() {
        let errors: Vec<_> = (1..=12).map(garbage).collect();
        let report = render_report(&errors, MAX_ERRORS).unwrap();
        assert!(report.starts_with("Changelog not valid, showing 8 of 12 errors:"));
        assert!(report.contains("at line 8\n"));
        assert!(!report.contains("at line 9\n"));
    }

    #[test]
    fn short_report_shows_everything() {
        let errors = vec![garbage(1), garbage(2)];
        let report = render_report(&errors, MAX_ERRORS).unwrap();
        assert!(report.starts_with("Changelog not valid, showing 2 of 2 errors:"));
    }
}
