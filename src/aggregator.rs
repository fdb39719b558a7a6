//! Collection of heading versions and selection of the highest one.

use log::*;
use semver::Version;

use crate::{
    error::Result,
    version::{ZERO_VERSION, parse_version},
};

/// Parses every heading and keeps the ones that contain a version, in
/// document order. Headings without a version are skipped, a heading whose
/// version cannot be represented fails the whole collection.
pub fn collect_versions<I, S>(headings: I) -> Result<Vec<Version>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions = vec![];

    for heading in headings {
        let heading = heading.as_ref();

        match parse_version(heading)? {
            Some(version) => versions.push(version),
            None => debug!("skipping heading without version: {heading}"),
        }
    }

    Ok(versions)
}

/// Highest version in `versions`, or 0.0.0 when there are none.
pub fn highest_version(versions: &[Version]) -> Version {
    versions.iter().max().cloned().unwrap_or(ZERO_VERSION)
}

/// Convenience combining [`collect_versions`] and [`highest_version`].
pub fn highest_version_in<I, S>(headings: I) -> Result<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(highest_version(&collect_versions(headings)?))
}
