//! Finds the nearest `CHANGELOG.md` and reports the highest version named in
//! its headings.
//!
//! The pipeline is a straight line:
//!
//! 1. [`find_changelog`] walks up from a directory to the closest changelog
//! 2. [`extract_headings`] turns the markdown into plain heading text
//! 3. [`collect_versions`] keeps the headings that contain a version
//! 4. [`highest_version`] picks the maximum, 0.0.0 when there is none
//!
//! [`read_changelog_versions`] covers steps 2 and 3 for a file on disk and
//! [`command::run::execute`] runs the whole thing.

pub mod aggregator;
pub mod changelog;
pub mod cli;
pub mod command;
pub mod error;
pub mod locator;
pub mod markdown;
pub mod version;

pub use aggregator::{collect_versions, highest_version, highest_version_in};
pub use changelog::read_changelog_versions;
pub use cli::{Args, Command, RunArgs};
pub use command::run::{self, RunOutcome};
pub use error::{Error, Result};
pub use locator::{CHANGELOG_FILE_NAME, find_changelog};
pub use markdown::extract_headings;
pub use semver::Version;
pub use version::{ZERO_VERSION, parse_version};
