//! CLI module for the changelog validator.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod input;
pub mod output;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Changelog validator - validates RPM-style package changelogs.
///
/// Checks every line of each changelog against the entry grammar and the
/// header field rules, and optionally compares the newest version with the
/// version the package declares. Supports both human-readable and JSON
/// output formats.
#[derive(Parser, Debug)]
#[command(name = "changelog-validator")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Changelog files to validate. Use '-' to read from stdin.
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Version declared by the package, compared with the newest changelog
    /// entry. A release suffix after '-' is ignored on both sides.
    #[arg(long, env = "CHANGELOG_DECLARED_VERSION")]
    pub declared_version: Option<String>,

    /// Maximum number of errors shown per changelog.
    #[arg(long, env = "CHANGELOG_MAX_ERRORS", default_value_t = 8)]
    pub max_errors: usize,

    /// Stop validating a changelog after the first offending line.
    #[arg(long, env = "CHANGELOG_STRICT")]
    pub strict: bool,

    /// Failure level for validation issues.
    /// 'warning' treats both errors and warnings as failures.
    /// 'error' only treats errors as failures.
    #[arg(long, env = "CHECK_FAILURE_LEVEL", default_value = "warning")]
    pub check_failure_level: FailureLevel,

    /// Output validation results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Failure level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FailureLevel {
    /// Treat both warnings and errors as failures (exit code 3).
    #[default]
    Warning,
    /// Only treat errors as failures.
    Error,
}
