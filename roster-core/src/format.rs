//! Plain-text renderings of a [`Team`] and its entries.
//!
//! These strings are the stable output contract of the command loop and the
//! terminal view. Callers decide where to print them.

use crate::team::Team;
use crate::types::RosterEntry;

const CARD_RULE_WIDTH: usize = 39;

/// Team identity, player count and season stats, ending with a blank line.
///
/// ```text
/// Team: Philadelphia Eagles
/// Coach: Nick Sirianni
/// Stadium: Lincoln Financial Field
/// Description: ...
/// Players: 2
/// Season Stats:
///   Wins: 12
///
/// ```
pub fn summary(team: &Team) -> String {
    let stats: String = team
        .get_stats()
        .iter()
        .map(|(name, value)| format!("  {name}: {value}\n"))
        .collect();
    format!(
        "Team: {}\nCoach: {}\nStadium: {}\nDescription: {}\nPlayers: {}\nSeason Stats:\n{stats}\n",
        team.name(),
        team.coach(),
        team.stadium(),
        team.description(),
        team.player_count(),
    )
}

/// `Roster for <team>:` followed by one indented line per player.
pub fn roster(team: &Team) -> String {
    let lines: String = team
        .list_players()
        .map(|player| format!("  {player}\n"))
        .collect();
    format!("Roster for {}:\n{lines}", team.name())
}

/// Framed detail card shown when an entry is selected.
pub fn detail_card(entry: &RosterEntry) -> String {
    let (title, fields): (&str, Vec<(&str, String)>) = match entry {
        RosterEntry::Player(p) => (
            "PLAYER INFORMATION",
            vec![
                ("Number:", format!("#{}", p.number)),
                ("Name:", p.name.clone()),
                ("Position:", p.position.clone()),
                ("College:", p.origin.clone()),
            ],
        ),
        RosterEntry::Coach(c) => (
            "COACH INFORMATION",
            vec![
                ("Name:", c.name.clone()),
                ("Position:", c.position.clone()),
                ("Specialty:", c.specialty.clone()),
            ],
        ),
        RosterEntry::Staff(s) => (
            "STAFF INFORMATION",
            vec![
                ("Name:", s.name.clone()),
                ("Department:", s.department.clone()),
                ("Role:", s.role.clone()),
            ],
        ),
    };

    let rule = "═".repeat(CARD_RULE_WIDTH);
    let body: String = fields
        .iter()
        .map(|(label, value)| format!("  {label:<12}{value}\n"))
        .collect();
    format!("{rule}\n  {title}\n{rule}\n\n{body}\n{rule}\n")
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
