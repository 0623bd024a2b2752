//! Error types for bundling operations.
//!
//! Every failure inside the bundling pipeline is fatal: nothing here is
//! retried, and the first error aborts the run.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while assembling and writing a locale bundle.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw I/O error without path context
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Filesystem operation failed on a specific path
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What the bundler was doing
        context: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// JSON serialization or parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive writer failed
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A catalog could not be parsed
    #[error("failed to parse catalog {}: {reason}", .path.display())]
    Catalog {
        /// Catalog file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A file the bundle cannot be built without is absent
    #[error("{what} not found at {}", .path.display())]
    MissingInput {
        /// Human name of the input
        what: &'static str,
        /// Where it was expected
        path: PathBuf,
    },

    /// The locale descriptor is malformed
    #[error("invalid locale descriptor: {0}")]
    InvalidDescriptor(String),

    /// An entry name would escape the bundle root or is empty
    #[error("invalid bundle entry name: {0:?}")]
    InvalidEntryName(String),

    /// Output writer used outside its open lifecycle
    #[error("output writer {0}")]
    SinkState(&'static str),

    /// Blocking task failed to complete
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

/// Attaches path context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps an I/O error with the operation being performed and the path involved.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Converts missing values into [`Error::GenericError`].
pub trait Context<T> {
    /// Adds a message describing what was expected.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_names_operation_and_path() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result
            .fs_context("reading catalog", "/tmp/fr/a.po")
            .unwrap_err();

        assert_eq!(err.to_string(), "reading catalog /tmp/fr/a.po: gone");
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let err = None::<u8>.context("no catalog name").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "no catalog name"));
    }

    #[test]
    fn bail_returns_formatted_generic_error() {
        fn check(name: &str) -> Result<()> {
            if !name.ends_with(".po") {
                crate::bail!("{name} is not a catalog");
            }
            Ok(())
        }

        assert!(check("fr.po").is_ok());
        let err = check("notes.txt").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "notes.txt is not a catalog"));
    }
}
