//! CSV row formatting and the append-only writer.
//!
//! Rows follow RFC 4180 quoting: a field containing a comma, double quote,
//! CR or LF is wrapped in double quotes with inner quotes doubled.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use csv::QuoteStyle;
use serde::{Deserialize, Serialize};

use crate::error::{csv_err, io_err, SignInError};

/// First line of a freshly created log.
pub const HEADER: &str = "Name,Email,Favorite Team,Login Date/Time";

/// `chrono` format for the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One visitor sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignIn {
    pub name: String,
    /// Email or other contact detail.
    pub contact: String,
    /// Favorite team or other affiliation.
    pub affiliation: String,
    pub at: NaiveDateTime,
}

impl SignIn {
    /// A sign-in stamped with the current local time.
    pub fn now(
        name: impl Into<String>,
        contact: impl Into<String>,
        affiliation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            affiliation: affiliation.into(),
            at: Local::now().naive_local(),
        }
    }
}

/// The four columns of `entry`, in [`HEADER`] order.
fn record(entry: &SignIn) -> [String; 4] {
    [
        entry.name.clone(),
        entry.contact.clone(),
        entry.affiliation.clone(),
        entry.at.format(TIMESTAMP_FORMAT).to_string(),
    ]
}

fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out)
}

/// Append `entry` to the log at `path`.
///
/// Creates the file (and missing parent directories) on first use, writing
/// [`HEADER`] before the first row. An existing file is never rewritten.
pub fn append_at(path: impl AsRef<Path>, entry: &SignIn) -> Result<(), SignInError> {
    let path = path.as_ref();
    let existed = path.exists();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_err(path, e))?;
    let mut writer = csv_writer(file);

    if !existed {
        tracing::debug!(path = %path.display(), "creating sign-in log");
        writer
            .write_record(HEADER.split(','))
            .map_err(|e| csv_err(path, e))?;
    }
    writer
        .write_record(record(entry))
        .map_err(|e| csv_err(path, e))?;
    writer.flush().map_err(|e| io_err(path, e))?;

    tracing::info!(path = %path.display(), "recorded sign-in");
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
