//! `roster show <number>`: one player by jersey number.

use anyhow::{Context, Result};
use clap::Args;

use roster_core::{format, query, JerseyNumber, RosterEntry, Team};

/// Arguments for `roster show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Jersey number to look up.
    pub number: JerseyNumber,

    /// Print the framed detail card instead of a single line.
    #[arg(long, conflicts_with = "json")]
    pub card: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(self, team: &Team) -> Result<()> {
        let Some(player) = query::find(team, self.number) else {
            println!("No player with number {}", self.number);
            return Ok(());
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(player).context("failed to serialize player JSON")?
            );
        } else if self.card {
            print!("{}", format::detail_card(&RosterEntry::Player(player.clone())));
        } else {
            println!("{player}");
        }
        Ok(())
    }
}
