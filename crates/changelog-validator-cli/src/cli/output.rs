//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for
//! changelog reports.

use changelog_validator_core::report::GUIDELINE_URL;
use changelog_validator_core::validate::checks::CheckOutcome;
use changelog_validator_core::validate::{Severity, ValidationError, ValidationResult};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Validation and check results for one changelog.
#[derive(Debug)]
pub struct FileReport {
    /// Display name of the changelog.
    pub path: String,
    /// The validation result.
    pub validation: ValidationResult,
    /// Check outcomes in the order the checks ran.
    pub checks: Vec<(&'static str, CheckOutcome)>,
}

impl FileReport {
    /// Creates a new report.
    pub fn new(
        path: impl Into<String>,
        validation: ValidationResult,
        checks: Vec<(&'static str, CheckOutcome)>,
    ) -> Self {
        Self {
            path: path.into(),
            validation,
            checks,
        }
    }

    /// Number of failed checks that carry no validation errors of their own.
    fn standalone_failures(&self) -> usize {
        self.checks
            .iter()
            .filter(|(_, outcome)| {
                matches!(outcome, CheckOutcome::Failed { errors, .. } if errors.is_empty())
            })
            .count()
    }

    /// Returns the number of errors.
    pub fn total_errors(&self) -> usize {
        self.validation.errors_only().count() + self.standalone_failures()
    }

    /// Returns the number of warnings.
    pub fn total_warnings(&self) -> usize {
        self.validation.warnings_only().count()
    }

    /// Returns true if the changelog has no issues at all.
    pub fn is_valid(&self) -> bool {
        self.total_errors() == 0 && self.total_warnings() == 0
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
    max_errors: usize,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool, max_errors: usize) -> Self {
        Self {
            writer,
            use_colors,
            max_errors: max_errors.max(1),
        }
    }

    /// Writes a header for a changelog.
    pub fn write_file_header(&mut self, path: &str) -> std::io::Result<()> {
        let header = format!("==> {}", path);
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes the failed checks of one changelog.
    pub fn write_file_report(&mut self, report: &FileReport) -> std::io::Result<()> {
        if report.is_valid() {
            return Ok(());
        }

        self.write_file_header(&report.path)?;

        for (name, outcome) in &report.checks {
            match outcome {
                CheckOutcome::Failed { errors, .. } if !errors.is_empty() => {
                    for error in errors.iter().take(self.max_errors) {
                        self.write_issue(error)?;
                    }
                    if errors.len() > self.max_errors {
                        self.write_note(&format!(
                            "... {} more issue(s) not shown",
                            errors.len() - self.max_errors
                        ))?;
                    }
                    self.write_note(&format!("please follow ref at {}", GUIDELINE_URL))?;
                }
                CheckOutcome::Failed { message, .. } => {
                    self.write_failure(name, message)?;
                }
                CheckOutcome::Passed | CheckOutcome::Skipped { .. } => {}
            }
        }

        Ok(())
    }

    /// Writes a single issue with its offending line.
    pub fn write_issue(&mut self, error: &ValidationError) -> std::io::Result<()> {
        let severity = error.severity();
        let message = error.to_string();

        let label = match severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };

        if self.use_colors {
            let colored_label = match severity {
                Severity::Error => format!("[{}]", label).red().bold(),
                Severity::Warning => format!("[{}]", label).yellow().bold(),
            };
            writeln!(self.writer, "  {} {}", colored_label, message)?;
        } else {
            writeln!(self.writer, "  [{}] {}", label, message)?;
        }

        if !error.raw_line().is_empty() {
            if self.use_colors {
                writeln!(self.writer, "      {}", error.raw_line().dimmed())?;
            } else {
                writeln!(self.writer, "      {}", error.raw_line())?;
            }
        }

        Ok(())
    }

    /// Writes a failed check that has no line-level issues.
    pub fn write_failure(&mut self, check_name: &str, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(
                self.writer,
                "  {} {}: {}",
                "[ERROR]".red().bold(),
                check_name,
                message
            )
        } else {
            writeln!(self.writer, "  [ERROR] {}: {}", check_name, message)
        }
    }

    fn write_note(&mut self, note: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "  {}", note.dimmed())
        } else {
            writeln!(self.writer, "  {}", note)
        }
    }

    /// Writes a summary of all validation results.
    pub fn write_summary(
        &mut self,
        total_files: usize,
        total_errors: usize,
        total_warnings: usize,
    ) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if total_errors == 0 && total_warnings == 0 {
            let message = format!("✓ {} changelog(s) valid", total_files);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ Found {} error(s) and {} warning(s)",
                total_errors, total_warnings
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

/// JSON output for a whole run.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Per-changelog results.
    pub files: Vec<JsonFile<'a>>,
    /// Total number of errors.
    pub errors: usize,
    /// Total number of warnings.
    pub warnings: usize,
}

/// JSON output for one changelog.
#[derive(Debug, Serialize)]
pub struct JsonFile<'a> {
    /// Display name of the changelog.
    pub path: &'a str,
    /// Whether the changelog has no issues.
    pub valid: bool,
    /// Version of the newest entry, when the changelog is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
    /// All line-level issues.
    pub issues: Vec<JsonIssue<'a>>,
    /// Check outcomes.
    pub checks: Vec<JsonCheck<'a>>,
}

/// A single issue in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonIssue<'a> {
    /// Human-readable message.
    pub message: String,
    /// Severity of the issue.
    pub severity: Severity,
    /// Structured error details.
    #[serde(flatten)]
    pub detail: &'a ValidationError,
}

impl<'a> From<&'a ValidationError> for JsonIssue<'a> {
    fn from(error: &'a ValidationError) -> Self {
        Self {
            message: error.to_string(),
            severity: error.severity(),
            detail: error,
        }
    }
}

/// A check outcome in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonCheck<'a> {
    /// Check name.
    pub name: &'static str,
    /// `passed`, `skipped` or `failed`.
    pub status: &'static str,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    /// Reason a check was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}

impl<'a> JsonCheck<'a> {
    fn new(name: &'static str, outcome: &'a CheckOutcome) -> Self {
        let (status, message, reason) = match outcome {
            CheckOutcome::Passed => ("passed", None, None),
            CheckOutcome::Skipped { reason } => ("skipped", None, Some(reason.as_str())),
            CheckOutcome::Failed { message, .. } => ("failed", Some(message.as_str()), None),
        };
        Self {
            name,
            status,
            message,
            reason,
        }
    }
}

impl<'a> From<&'a FileReport> for JsonFile<'a> {
    fn from(report: &'a FileReport) -> Self {
        Self {
            path: &report.path,
            valid: report.is_valid(),
            version: report.validation.version(),
            issues: report.validation.errors.iter().map(JsonIssue::from).collect(),
            checks: report
                .checks
                .iter()
                .map(|(name, outcome)| JsonCheck::new(*name, outcome))
                .collect(),
        }
    }
}

/// Collects the reports of all changelogs in argument order.
#[derive(Debug, Default)]
pub struct Reports {
    files: Vec<FileReport>,
}

impl Reports {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the report for one changelog.
    pub fn add(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Returns the total number of errors.
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(FileReport::total_errors).sum()
    }

    /// Returns the total number of warnings.
    pub fn total_warnings(&self) -> usize {
        self.files.iter().map(FileReport::total_warnings).sum()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.total_warnings() > 0
    }

    /// Writes results in human-readable format.
    pub fn write_human<W: Write>(
        &self,
        writer: &mut W,
        use_colors: bool,
        max_errors: usize,
    ) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors, max_errors);

        for report in &self.files {
            output.write_file_report(report)?;
        }

        output.write_summary(self.files.len(), self.total_errors(), self.total_warnings())
    }

    /// Writes results in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            files: self.files.iter().map(JsonFile::from).collect(),
            errors: self.total_errors(),
            warnings: self.total_warnings(),
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}
