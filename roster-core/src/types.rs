//! Domain types for the roster registry.
//!
//! Roster records are plain immutable values. None of them refers back to
//! the [`Team`](crate::team::Team) that owns it.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::query::SearchQuery;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A player's jersey number; the unique roster key for players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JerseyNumber(pub u32);

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for JerseyNumber {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl FromStr for JerseyNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Registry key for coaches and staff, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryKey(pub u64);

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A named season statistic value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(n) => n.fmt(f),
            StatValue::Decimal(x) => x.fmt(f),
        }
    }
}

impl From<i64> for StatValue {
    fn from(n: i64) -> Self {
        StatValue::Integer(n)
    }
}

impl From<i32> for StatValue {
    fn from(n: i32) -> Self {
        StatValue::Integer(n.into())
    }
}

impl From<u32> for StatValue {
    fn from(n: u32) -> Self {
        StatValue::Integer(n.into())
    }
}

impl From<f64> for StatValue {
    fn from(x: f64) -> Self {
        StatValue::Decimal(x)
    }
}

/// Which slice of the roster an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterCategory {
    #[default]
    Players,
    Coaches,
    Staff,
}

impl fmt::Display for RosterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterCategory::Players => write!(f, "players"),
            RosterCategory::Coaches => write!(f, "coaches"),
            RosterCategory::Staff => write!(f, "staff"),
        }
    }
}

impl FromStr for RosterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "players" | "player" => Ok(RosterCategory::Players),
            "coaches" | "coach" => Ok(RosterCategory::Coaches),
            "staff" => Ok(RosterCategory::Staff),
            other => Err(format!(
                "unknown roster category '{other}'; expected: players, coaches, staff"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// What the query engine and presentation layers need from any roster record.
pub trait RosterMember {
    fn display_name(&self) -> &str;

    /// Whether this record satisfies `query`. An empty query matches everything.
    fn matches(&self, query: &SearchQuery) -> bool;
}

// ---------------------------------------------------------------------------
// Roster records
// ---------------------------------------------------------------------------

/// A player, keyed on the roster by jersey number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: JerseyNumber,
    pub name: String,
    pub position: String,
    /// College, nationality or previous club.
    pub origin: String,
}

impl Player {
    pub fn new(
        number: u32,
        name: impl Into<String>,
        position: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            number: JerseyNumber(number),
            name: name.into(),
            position: position.into(),
            origin: origin.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} — {} ({})",
            self.number, self.name, self.position, self.origin
        )
    }
}

impl RosterMember for Player {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        query.is_empty() || query.found_in(&self.name) || query.is_number(self.number)
    }
}

/// A member of the coaching staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    pub name: String,
    pub position: String,
    pub specialty: String,
}

impl Coach {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            specialty: specialty.into(),
        }
    }
}

impl fmt::Display for Coach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {} ({})", self.name, self.position, self.specialty)
    }
}

impl RosterMember for Coach {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        query.is_empty() || query.found_in(&self.name) || query.found_in(&self.position)
    }
}

/// Non-coaching support staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub name: String,
    pub department: String,
    pub role: String,
}

impl Staff {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {} ({})", self.name, self.role, self.department)
    }
}

impl RosterMember for Staff {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        query.is_empty()
            || query.found_in(&self.name)
            || query.found_in(&self.department)
            || query.found_in(&self.role)
    }
}

// ---------------------------------------------------------------------------
// Sum type
// ---------------------------------------------------------------------------

/// Any roster record. Presentation layers dispatch on this once instead of
/// re-checking the record kind at each call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RosterEntry {
    Player(Player),
    Coach(Coach),
    Staff(Staff),
}

impl RosterEntry {
    pub fn category(&self) -> RosterCategory {
        match self {
            RosterEntry::Player(_) => RosterCategory::Players,
            RosterEntry::Coach(_) => RosterCategory::Coaches,
            RosterEntry::Staff(_) => RosterCategory::Staff,
        }
    }

    fn member(&self) -> &dyn RosterMember {
        match self {
            RosterEntry::Player(p) => p,
            RosterEntry::Coach(c) => c,
            RosterEntry::Staff(s) => s,
        }
    }
}

impl RosterMember for RosterEntry {
    fn display_name(&self) -> &str {
        self.member().display_name()
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        self.member().matches(query)
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterEntry::Player(p) => p.fmt(f),
            RosterEntry::Coach(c) => c.fmt(f),
            RosterEntry::Staff(s) => s.fmt(f),
        }
    }
}

impl From<Player> for RosterEntry {
    fn from(p: Player) -> Self {
        RosterEntry::Player(p)
    }
}

impl From<Coach> for RosterEntry {
    fn from(c: Coach) -> Self {
        RosterEntry::Coach(c)
    }
}

impl From<Staff> for RosterEntry {
    fn from(s: Staff) -> Self {
        RosterEntry::Staff(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
