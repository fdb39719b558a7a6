//! Reading a changelog file and extracting the versions of its headings.

use log::*;
use semver::Version;
use std::{fs, path::Path};

use crate::{
    aggregator::collect_versions,
    error::{Error, Result},
    markdown::extract_headings,
};

/// Reads the changelog at `path` and returns the version of every heading
/// that has one, in document order.
///
/// An empty changelog, or one whose headings hold no versions, yields an
/// empty vector. Fails when the file cannot be read, is not valid UTF-8 or
/// holds a version number too large to represent.
pub fn read_changelog_versions(path: &Path) -> Result<Vec<Version>> {
    let bytes = fs::read(path).map_err(|err| Error::read(path, err))?;
    let content =
        String::from_utf8(bytes).map_err(|err| Error::parse(path, err))?;

    let headings = extract_headings(&content);

    for heading in headings.iter() {
        debug!("heading: {heading}");
    }

    let versions = collect_versions(&headings)?;

    debug!(
        "found {} versions in {} headings",
        versions.len(),
        headings.len()
    );

    Ok(versions)
}
