//! The [`Team`] aggregate: identity fields, the player registry keyed by
//! jersey number, auxiliary coach/staff registries and season statistics.
//!
//! All enumeration is insertion-ordered. Re-adding a player under a number
//! that is already taken replaces the record in place (roster correction)
//! without moving it.

use crate::registry::KeyedRegistry;
use crate::types::{
    Coach, EntryKey, JerseyNumber, Player, RosterCategory, RosterEntry, Staff, StatValue,
};

/// A team and everything it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    name: String,
    coach: String,
    stadium: String,
    description: String,
    players: KeyedRegistry<JerseyNumber, Player>,
    coaches: KeyedRegistry<EntryKey, Coach>,
    staff: KeyedRegistry<EntryKey, Staff>,
    stats: KeyedRegistry<String, StatValue>,
    next_key: u64,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        coach: impl Into<String>,
        stadium: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            coach: coach.into(),
            stadium: stadium.into(),
            description: description.into(),
            players: KeyedRegistry::new(),
            coaches: KeyedRegistry::new(),
            staff: KeyedRegistry::new(),
            stats: KeyedRegistry::new(),
            next_key: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Head coach named on the team card.
    pub fn coach(&self) -> &str {
        &self.coach
    }

    pub fn stadium(&self) -> &str {
        &self.stadium
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // -----------------------------------------------------------------------
    // Players
    // -----------------------------------------------------------------------

    /// Add `player` under its jersey number, returning any record it replaced.
    pub fn add_player(&mut self, player: Player) -> Option<Player> {
        self.players.put(player.number, player)
    }

    pub fn get_player(&self, number: JerseyNumber) -> Option<&Player> {
        self.players.get(&number)
    }

    pub fn remove_player(&mut self, number: JerseyNumber) -> Option<Player> {
        self.players.remove(&number)
    }

    /// Players in the order their numbers were first added.
    pub fn list_players(&self) -> impl ExactSizeIterator<Item = &Player> + '_ {
        self.players.values()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // -----------------------------------------------------------------------
    // Coaches and staff
    // -----------------------------------------------------------------------

    pub fn add_coach(&mut self, coach: Coach) -> EntryKey {
        let key = self.allocate_key();
        self.coaches.put(key, coach);
        key
    }

    pub fn remove_coach(&mut self, key: EntryKey) -> Option<Coach> {
        self.coaches.remove(&key)
    }

    pub fn list_coaches(&self) -> impl ExactSizeIterator<Item = &Coach> + '_ {
        self.coaches.values()
    }

    pub fn add_staff(&mut self, staff: Staff) -> EntryKey {
        let key = self.allocate_key();
        self.staff.put(key, staff);
        key
    }

    pub fn remove_staff(&mut self, key: EntryKey) -> Option<Staff> {
        self.staff.remove(&key)
    }

    pub fn list_staff(&self) -> impl ExactSizeIterator<Item = &Staff> + '_ {
        self.staff.values()
    }

    /// Snapshot of one roster category as sum-typed entries.
    pub fn entries(&self, category: RosterCategory) -> Vec<RosterEntry> {
        match category {
            RosterCategory::Players => self
                .list_players()
                .cloned()
                .map(RosterEntry::from)
                .collect(),
            RosterCategory::Coaches => self
                .list_coaches()
                .cloned()
                .map(RosterEntry::from)
                .collect(),
            RosterCategory::Staff => self.list_staff().cloned().map(RosterEntry::from).collect(),
        }
    }

    // Keys are never reused, even after removal.
    fn allocate_key(&mut self) -> EntryKey {
        let key = EntryKey(self.next_key);
        self.next_key += 1;
        key
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Set a named statistic. Last write wins; the name keeps its first position.
    pub fn set_stat(&mut self, name: impl Into<String>, value: impl Into<StatValue>) {
        self.stats.put(name.into(), value.into());
    }

    pub fn get_stat(&self, name: &str) -> Option<StatValue> {
        self.stats.get(name).copied()
    }

    /// Read-only view of all statistics in the order they were first set.
    pub fn get_stats(&self) -> &KeyedRegistry<String, StatValue> {
        &self.stats
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
