//! Query engine: exact lookup and case-insensitive substring search over an
//! enumerated roster.
//!
//! Every function here is pure. Results keep the order of the source
//! listing, and a query that matches nothing yields an empty `Vec`.

use crate::team::Team;
use crate::types::{JerseyNumber, Player, RosterCategory, RosterEntry, RosterMember};

/// Normalized free-text query.
///
/// Text is trimmed once on construction; whitespace-only input is the empty
/// query and matches every entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    text: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_owned();
        let folded = text.to_lowercase();
        Self { text, folded }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Case-insensitive containment of the query in `field`.
    pub fn found_in(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.folded)
    }

    /// Exact match against the decimal form of `number` ("1" matches #1, not #11).
    pub fn is_number(&self, number: JerseyNumber) -> bool {
        self.text == number.to_string()
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Filter `entries` down to those matching `text`, preserving order.
pub fn search<'a, T, I>(entries: I, text: &str) -> Vec<&'a T>
where
    T: RosterMember + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let query = SearchQuery::new(text);
    entries.into_iter().filter(|e| e.matches(&query)).collect()
}

/// Exact jersey-number lookup.
pub fn find(team: &Team, number: JerseyNumber) -> Option<&Player> {
    team.get_player(number)
}

/// Search the player listing in [`Team::list_players`] order.
pub fn search_players<'a>(team: &'a Team, text: &str) -> Vec<&'a Player> {
    search(team.list_players(), text)
}

/// Search one roster category, returning owned entries for display.
pub fn search_category(team: &Team, category: RosterCategory, text: &str) -> Vec<RosterEntry> {
    let query = SearchQuery::new(text);
    team.entries(category)
        .into_iter()
        .filter(|e| e.matches(&query))
        .collect()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
