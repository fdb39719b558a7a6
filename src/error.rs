//! Error types for locating and reading changelogs.

use std::{io, num::ParseIntError, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

/// Main error type for changelog version operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "CHANGELOG.md not found in {start} or any of its parent directories"
    )]
    ChangelogNotFound { start: PathBuf },

    #[error("Failed to read changelog {path}: {source}")]
    ChangelogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse changelog {path}: {source}")]
    ChangelogParse {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Invalid version in {text:?}: {source}")]
    InvalidVersion {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a not found error for the directory the search started in.
    pub fn not_found(start: impl Into<PathBuf>) -> Self {
        Self::ChangelogNotFound {
            start: start.into(),
        }
    }

    /// Create a read error for the changelog at `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ChangelogRead {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid version error for a matched version token in
    /// `text` whose number could not be parsed.
    pub fn invalid_version(
        text: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::InvalidVersion {
            text: text.into(),
            source,
        }
    }

    /// Create a parse error for the changelog at `path`.
    pub fn parse(path: impl Into<PathBuf>, source: FromUtf8Error) -> Self {
        Self::ChangelogParse {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = Error::not_found("/tmp/project");
        assert_eq!(
            err.to_string(),
            "CHANGELOG.md not found in /tmp/project or any of its parent directories"
        );

        let err = Error::read(
            "/tmp/CHANGELOG.md",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to read changelog /tmp/CHANGELOG.md: denied"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = Error::not_found("/tmp");
        assert!(matches!(err, Error::ChangelogNotFound { .. }));

        let err =
            Error::read("/tmp/CHANGELOG.md", io::Error::other("gone"));
        assert!(matches!(err, Error::ChangelogRead { .. }));

        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = Error::parse("/tmp/CHANGELOG.md", utf8_err);
        assert!(matches!(err, Error::ChangelogParse { .. }));
        assert!(err.to_string().starts_with(
            "Failed to parse changelog /tmp/CHANGELOG.md: invalid utf-8"
        ));

        let int_err = "99999999999999999999999".parse::<u64>().unwrap_err();
        let err = Error::invalid_version("v99999999999999999999999", int_err);
        assert!(matches!(err, Error::InvalidVersion { .. }));
    }
}
