//! Presentation configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.roster/
//!   config.yaml   (optional: defaults apply when absent)
//! ```
//!
//! # API pattern
//!
//! Every function that touches the filesystem has two forms:
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{io_err, RosterError};

/// Default location of the visitor sign-in log, relative to the working directory.
pub const DEFAULT_SIGN_IN_LOG: &str = "userinfo.csv";

/// Color names for the terminal view, resolved by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Headings and the team banner.
    pub primary: String,
    pub accent: String,
    /// Selected entry in the view.
    pub highlight: String,
    pub muted: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "green".to_string(),
            accent: "bright white".to_string(),
            highlight: "bright green".to_string(),
            muted: "bright black".to_string(),
        }
    }
}

/// Root of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub sign_in_log: PathBuf,
    pub palette: Palette,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            sign_in_log: PathBuf::from(DEFAULT_SIGN_IN_LOG),
            palette: Palette::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// `<home>/.roster/config.yaml`: pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".roster").join("config.yaml")
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load configuration from an explicit file path.
///
/// A missing file yields [`RosterConfig::default`]; malformed YAML is
/// `RosterError::Parse` with the path attached.
pub fn load_from(path: &Path) -> Result<RosterConfig, RosterError> {
    if !path.exists() {
        return Ok(RosterConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    if contents.trim().is_empty() {
        return Ok(RosterConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| RosterError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load `<home>/.roster/config.yaml`.
pub fn load_at(home: &Path) -> Result<RosterConfig, RosterError> {
    load_from(&config_path_at(home))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<RosterConfig, RosterError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, RosterError> {
    dirs::home_dir().ok_or(RosterError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
