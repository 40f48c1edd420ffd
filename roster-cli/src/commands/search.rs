//! `roster search <text>`: case-insensitive search within one category.

use anyhow::Result;
use clap::Args;

use roster_core::{query, RosterCategory, Team};

use super::list::print_entries;

/// Arguments for `roster search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for. Players also match on exact jersey number.
    /// An empty string lists the whole category.
    pub text: String,

    /// Roster category: players | coaches | staff. Defaults to players.
    #[arg(long, short = 'c', default_value_t = RosterCategory::Players)]
    pub category: RosterCategory,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn run(self, team: &Team) -> Result<()> {
        let hits = query::search_category(team, self.category, &self.text);
        tracing::debug!(query = %self.text, hits = hits.len(), "search");
        print_entries(team, self.category, &hits, self.json)
    }
}
