//! Random changelog generation for benchmarking and testing.
//!
//! Generated changelogs are always valid: entries are newest first, dates
//! carry the matching weekday and every entry has at least one body line.

use crate::validate::DATE_FORMAT;
use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating changelogs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of entries to generate.
    pub num_entries: usize,
    /// Maximum body lines per entry (at least 1).
    pub max_body_lines: usize,
    /// Chance in percent that a body line gets a continuation line.
    pub continuation_probability: u32,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_entries: 100,
            max_body_lines: 4,
            continuation_probability: 15,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with the given number of entries.
    pub fn new(num_entries: usize) -> Self {
        Self {
            num_entries,
            ..Default::default()
        }
    }

    /// Small fixture (~10 entries).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 entries).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 entries).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k entries).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a changelog targeting approximately the given byte size.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average entry is ~170 bytes
        Self::new(bytes.saturating_div(170).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the maximum body lines per entry.
    pub fn with_max_body_lines(mut self, max: usize) -> Self {
        self.max_body_lines = max.max(1);
        self
    }

    /// Set the continuation line probability, capped at 100.
    pub fn with_continuation_probability(mut self, percent: u32) -> Self {
        self.continuation_probability = percent.min(100);
        self
    }
}

mod vocabulary {
    pub const FIRST_NAMES: &[&str] = &["Jane", "John", "Alex", "Sam", "Marja", "Kim", "Robin"];
    pub const LAST_NAMES: &[&str] = &["Doe", "Smith", "Virtanen", "Lee", "Novak", "Garcia"];
    pub const VERBS: &[&str] = &["Fixed", "Added", "Removed", "Updated", "Refactored"];
    pub const SUBJECTS: &[&str] = &[
        "a crash on startup",
        "the build dependencies",
        "support for config reload",
        "an obsolete patch",
        "the translations",
        "packaging of the docs",
    ];
    pub const CONTINUATIONS: &[&str] = &[
        "Contributes to JB#1234",
        "See upstream changelog for details",
        "Requires a rebuild of dependent packages",
    ];
}

/// Newest entry date.
const START_DATE: Option<NaiveDate> = NaiveDate::from_ymd_opt(2024, 6, 28);

/// Largest gap in days between two consecutive entries.
const MAX_GAP_DAYS: u64 = 14;

/// Generates a changelog as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut date = START_DATE.unwrap_or_default();
    let mut entries = Vec::with_capacity(config.num_entries);

    for index in 0..config.num_entries {
        let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let version = format!(
            "{}.{}.{}-1",
            (config.num_entries - index) / 100,
            (config.num_entries - index) % 100,
            rng.random_range(0..10)
        );

        let mut entry = format!(
            "* {} {} {} <{}.{}@example.com> - {}\n",
            date.format(DATE_FORMAT),
            first,
            last,
            first.to_lowercase(),
            last.to_lowercase(),
            version
        );

        let body_lines = rng.random_range(1..=config.max_body_lines.max(1));
        for _ in 0..body_lines {
            let verb = VERBS[rng.random_range(0..VERBS.len())];
            let subject = SUBJECTS[rng.random_range(0..SUBJECTS.len())];
            entry.push_str(&format!("- {} {}\n", verb, subject));
            if rng.random_ratio(config.continuation_probability.min(100), 100) {
                let text = CONTINUATIONS[rng.random_range(0..CONTINUATIONS.len())];
                entry.push_str(&format!("  {}\n", text));
            }
        }
        entries.push(entry);

        let gap = Days::new(rng.random_range(1..=MAX_GAP_DAYS));
        date = date.checked_sub_days(gap).unwrap_or(date);
    }

    entries.join("\n")
}
