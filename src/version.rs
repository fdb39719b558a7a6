//! Recognition of version tokens in free text.
//!
//! Versions are plain `semver::Version` values whose pre-release and build
//! metadata are always empty, which makes their ordering the lexicographic
//! ordering of `(major, minor, patch)`.

use regex::{Captures, Regex};
use semver::Version;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Optional `v` prefix followed by one to three dot separated numbers.
/// Not anchored, so the token may appear anywhere in the text. Digits are
/// ASCII only.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?").unwrap()
});

/// Version reported when a changelog has no version headings.
pub const ZERO_VERSION: Version = Version::new(0, 0, 0);

/// Parses the first version token found in `text`.
///
/// Minor and patch default to 0 when absent. Bare numbers are accepted,
/// so "Chapter 5" yields 5.0.0. Returns `Ok(None)` when nothing matches
/// and [`Error::InvalidVersion`] when a matched component does not fit in
/// a `u64`.
pub fn parse_version(text: &str) -> Result<Option<Version>> {
    let Some(captures) = VERSION_REGEX.captures(text) else {
        return Ok(None);
    };

    let major = component(text, &captures, 1)?;
    let minor = component(text, &captures, 2)?;
    let patch = component(text, &captures, 3)?;

    Ok(Some(Version::new(major, minor, patch)))
}

/// Absent groups count as 0.
fn component(text: &str, captures: &Captures, index: usize) -> Result<u64> {
    let Some(group) = captures.get(index) else {
        return Ok(0);
    };

    group
        .as_str()
        .parse::<u64>()
        .map_err(|err| Error::invalid_version(text, err))
}
