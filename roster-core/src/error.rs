//! Error types for roster-core.
//!
//! Lookups never fail: an unknown jersey number or stat name is `None`.
//! Only the configuration layer touches the filesystem and can error.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading roster configuration.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Underlying I/O failure, annotated with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load: includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`: cannot locate `~/.roster/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`RosterError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RosterError {
    RosterError::Io {
        path: path.into(),
        source,
    }
}
