//! Roster core library: keyed registry, roster records, team aggregate,
//! query engine and text renderings.
//!
//! - [`registry`]: [`KeyedRegistry`], the insertion-ordered keyed collection
//! - [`types`]: [`Player`], [`Coach`], [`Staff`], [`RosterEntry`] and friends
//! - [`team`]: [`Team`]
//! - [`query`]: exact lookup and case-insensitive search
//! - [`format`]: summary, roster and detail-card text
//! - [`config`]: presentation configuration (`~/.roster/config.yaml`)
//! - [`error`]: [`RosterError`]
//!
//! Everything here is single-threaded and synchronous. Callers driving the
//! core from an event loop must serialize their calls onto one thread.

pub mod config;
pub mod error;
pub mod format;
pub mod query;
pub mod registry;
pub mod team;
pub mod types;

pub use config::{Palette, RosterConfig};
pub use error::RosterError;
pub use query::SearchQuery;
pub use registry::KeyedRegistry;
pub use team::Team;
pub use types::{
    Coach, EntryKey, JerseyNumber, Player, RosterCategory, RosterEntry, RosterMember, Staff,
    StatValue,
};
