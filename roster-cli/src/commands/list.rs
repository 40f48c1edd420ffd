//! `roster list`: one roster category as a table.

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use roster_core::{RosterCategory, RosterEntry, Team};

/// Arguments for `roster list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Roster category: players | coaches | staff. Defaults to players.
    #[arg(long, short = 'c', default_value_t = RosterCategory::Players)]
    pub category: RosterCategory,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, team: &Team) -> Result<()> {
        let entries = team.entries(self.category);
        print_entries(team, self.category, &entries, self.json)
    }
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "position / role")]
    role: String,
    #[tabled(rename = "detail")]
    detail: String,
}

impl From<&RosterEntry> for EntryRow {
    fn from(entry: &RosterEntry) -> Self {
        match entry {
            RosterEntry::Player(p) => EntryRow {
                number: p.number.to_string(),
                name: p.name.clone(),
                role: p.position.clone(),
                detail: p.origin.clone(),
            },
            RosterEntry::Coach(c) => EntryRow {
                number: String::new(),
                name: c.name.clone(),
                role: c.position.clone(),
                detail: c.specialty.clone(),
            },
            RosterEntry::Staff(s) => EntryRow {
                number: String::new(),
                name: s.name.clone(),
                role: s.role.clone(),
                detail: s.department.clone(),
            },
        }
    }
}

/// Shared by `list` and `search`: a rounded table, or pretty JSON.
pub(crate) fn print_entries(
    team: &Team,
    category: RosterCategory,
    entries: &[RosterEntry],
    json: bool,
) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(entries).context("failed to serialize roster JSON")?
        );
        return Ok(());
    }

    println!("{} | {} {}", team.name(), entries.len(), category);
    if entries.is_empty() {
        println!("No matching {category}.");
        return Ok(());
    }
    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}
