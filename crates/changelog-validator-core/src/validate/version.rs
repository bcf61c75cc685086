//! Cross-check between the changelog version and a declared package version.
//!
//! The declared version comes from elsewhere (usually the package spec
//! file); reading it is up to the caller.

use serde::Serialize;
use thiserror::Error;

/// The newest changelog version disagrees with the declared version.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("Last changelog version {changelog_version} does not match version {declared_version} in spec file.")]
pub struct VersionMismatch {
    /// The version from the first changelog header.
    pub changelog_version: String,
    /// The version declared by the package.
    pub declared_version: String,
}

/// Strips a release suffix: everything from the first `-` on.
pub fn strip_release(version: &str) -> &str {
    version.split_once('-').map_or(version, |(base, _)| base)
}

/// Compares a changelog version with a declared version, ignoring any
/// release suffix on either side.
pub fn check_version_match(
    changelog_version: &str,
    declared_version: &str,
) -> Result<(), VersionMismatch> {
    if strip_release(changelog_version) == strip_release(declared_version) {
        Ok(())
    } else {
        Err(VersionMismatch {
            changelog_version: changelog_version.to_string(),
            declared_version: declared_version.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_release_suffix() {
        assert_eq!(strip_release("0.6.1-1"), "0.6.1");
        assert_eq!(strip_release("0.6.1"), "0.6.1");
        assert_eq!(strip_release("1.0-rc1-2"), "1.0");
    }

    #[test]
    fn matching_versions() {
        assert!(check_version_match("0.6.1", "0.6.1").is_ok());
        assert!(check_version_match("0.6.1-3", "0.6.1").is_ok());
    }

    #[test]
    fn mismatching_versions() {
        let error = check_version_match("0.6.1-1", "0.7.0").unwrap_err();
        assert_eq!(error.changelog_version, "0.6.1-1");
        assert_eq!(
            error.to_string(),
            "Last changelog version 0.6.1-1 does not match version 0.7.0 in spec file."
        );
    }
}
