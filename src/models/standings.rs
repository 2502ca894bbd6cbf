//! Leaderboard rows and the scope they were computed for.

use crate::models::error::ScoreError;
use crate::models::group::Group;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// What a leaderboard covers: one group, or all groups pooled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scope {
    Group(Group),
    Combined,
}

impl Scope {
    /// Groups whose matches fall inside this scope.
    pub fn groups(self) -> Vec<Group> {
        match self {
            Scope::Group(g) => vec![g],
            Scope::Combined => Group::ALL.to_vec(),
        }
    }

    pub fn is_combined(self) -> bool {
        self == Scope::Combined
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Group(g) => write!(f, "{g}"),
            Scope::Combined => f.write_str("combined"),
        }
    }
}

impl FromStr for Scope {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "combined" {
            Ok(Scope::Combined)
        } else {
            s.parse().map(Scope::Group)
        }
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One team's standing. Derived on every read, never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaderboardRow {
    /// Dense 1-based position.
    pub rank: usize,
    pub team: String,
    pub group: Group,
    /// Number of first-place finishes (WWCD).
    pub wins: u64,
    /// Sum of placement points (PLCT).
    pub points: u64,
    /// Sum of kills over all matches.
    pub kills: u64,
}

impl LeaderboardRow {
    /// Placement points plus kills.
    pub fn total(&self) -> u64 {
        self.points + self.kills
    }
}

impl Serialize for LeaderboardRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LeaderboardRow", 7)?;
        s.serialize_field("rank", &self.rank)?;
        s.serialize_field("team", &self.team)?;
        s.serialize_field("group", &self.group)?;
        s.serialize_field("wins", &self.wins)?;
        s.serialize_field("points", &self.points)?;
        s.serialize_field("kills", &self.kills)?;
        s.serialize_field("total", &self.total())?;
        s.end()
    }
}

/// A computed leaderboard plus the number of matches it was built from.
#[derive(Clone, Debug, Serialize)]
pub struct Standings {
    #[serde(rename = "group")]
    pub scope: Scope,
    pub match_count: usize,
    pub rows: Vec<LeaderboardRow>,
}

impl Standings {
    /// True when no match has been recorded for the scope yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
