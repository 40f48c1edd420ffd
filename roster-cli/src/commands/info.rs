//! `roster info`: team summary and season statistics.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use roster_core::{format, KeyedRegistry, StatValue, Team};

/// Arguments for `roster info`.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TeamInfoJson<'a> {
    name: &'a str,
    coach: &'a str,
    stadium: &'a str,
    description: &'a str,
    players: usize,
    stats: &'a KeyedRegistry<String, StatValue>,
}

impl InfoArgs {
    pub fn run(self, team: &Team) -> Result<()> {
        if !self.json {
            print!("{}", format::summary(team));
            return Ok(());
        }

        let payload = TeamInfoJson {
            name: team.name(),
            coach: team.coach(),
            stadium: team.stadium(),
            description: team.description(),
            players: team.player_count(),
            stats: team.get_stats(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("failed to serialize team JSON")?
        );
        Ok(())
    }
}
