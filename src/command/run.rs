//! Run command implementation.
use log::*;
use semver::Version;
use std::path::PathBuf;

use crate::{
    aggregator::highest_version, changelog::read_changelog_versions,
    cli::RunArgs, error::Result, locator::find_changelog,
};

/// Everything a single run found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Path of the changelog that was read.
    pub changelog_path: PathBuf,
    /// Versions of the changelog headings, in document order.
    pub versions: Vec<Version>,
    /// Highest entry of `versions`, 0.0.0 when there are none.
    pub highest: Version,
}

/// Find the changelog closest to the working directory and report the
/// highest version among its headings.
pub fn execute(args: &RunArgs) -> Result<RunOutcome> {
    info!("starting changelog version run");
    info!("working directory: {}", args.work_dir.display());

    let changelog_path = find_changelog(&args.work_dir)?;
    info!("found changelog on path: {}", changelog_path.display());

    info!("extracting version information from the changelog");
    let versions = read_changelog_versions(&changelog_path)?;

    if versions.is_empty() {
        info!("no version headings found in changelog");
    }

    let highest = highest_version(&versions);
    info!(
        "Found highest version: {}.{}.{}",
        highest.major, highest.minor, highest.patch
    );

    Ok(RunOutcome {
        changelog_path,
        versions,
        highest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, version::ZERO_VERSION};
    use std::fs;
    use tempfile::TempDir;

    #[test_log::test]
    fn reports_highest_version_from_parent_changelog() {
        let temp_dir = TempDir::new().unwrap();
        let changelog = temp_dir.path().join("CHANGELOG.md");
        fs::write(&changelog, "# Changelog\n## 1.2.0\n## 1.10.0\n## 1.9.3\n")
            .unwrap();
        let work_dir = temp_dir.path().join("crates").join("core");
        fs::create_dir_all(&work_dir).unwrap();

        let outcome = execute(&RunArgs { work_dir }).unwrap();

        assert_eq!(outcome.changelog_path, changelog);
        assert_eq!(outcome.versions.len(), 3);
        assert_eq!(outcome.highest, Version::new(1, 10, 0));
    }

    #[test_log::test]
    fn reports_zero_version_for_changelog_without_versions() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("CHANGELOG.md"),
            "# Changelog\n\nNothing released yet.\n",
        )
        .unwrap();

        let outcome = execute(&RunArgs {
            work_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap();

        assert!(outcome.versions.is_empty());
        assert_eq!(outcome.highest, ZERO_VERSION);
    }

    #[test]
    fn propagates_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("CHANGELOG.md"), b"# 1.0.0\n\xc3\x28")
            .unwrap();

        let err = execute(&RunArgs {
            work_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap_err();

        assert!(matches!(err, Error::ChangelogParse { .. }));
    }
}
