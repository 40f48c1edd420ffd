//! Error types for roster-signin.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while appending to the sign-in log.
#[derive(Debug, Error)]
pub enum SignInError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing a CSV record failed.
    #[error("CSV error at {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Convenience constructor for [`SignInError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SignInError {
    SignInError::Io {
        path: path.into(),
        source,
    }
}

pub(crate) fn csv_err(path: impl Into<PathBuf>, source: csv::Error) -> SignInError {
    SignInError::Csv {
        path: path.into(),
        source,
    }
}
