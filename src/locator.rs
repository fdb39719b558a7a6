//! Bottom-up search for the nearest changelog.

use log::*;
use std::path::{self, Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the file the search looks for. Case sensitive.
pub const CHANGELOG_FILE_NAME: &str = "CHANGELOG.md";

/// Finds the closest `CHANGELOG.md` at or above `start`.
///
/// `start` is checked first, then each parent directory in turn up to the
/// filesystem root. Sibling and child directories are never visited and
/// nothing is read, only existence is checked. Relative paths are made
/// absolute against the current directory first so the walk can go past
/// it, and `.` / `..` components are resolved lexically so the walk
/// follows the real chain of parents. Symlinks are left as they are.
pub fn find_changelog(start: &Path) -> Result<PathBuf> {
    let start = normalize(
        &path::absolute(start).unwrap_or_else(|_| start.to_path_buf()),
    );

    let mut current = Some(start.as_path());

    while let Some(dir) = current {
        let candidate = dir.join(CHANGELOG_FILE_NAME);

        debug!("looking for changelog: {}", candidate.display());

        if candidate.is_file() {
            return Ok(candidate);
        }

        current = dir.parent();
    }

    Err(Error::not_found(start))
}

/// Drops `.` components and pops the previous component on `..`.
/// A `..` directly below the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            _ => normalized.push(component),
        }
    }

    normalized
}
