//! Submitted team entries and persisted per-team match records.

use crate::models::group::Group;
use crate::models::points::{placement_points, wwcd};
use serde::{Deserialize, Serialize};

/// Sequence number of a match within its group (1-based).
pub type MatchNo = u32;

/// One team's result as submitted for a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub team: String,
    /// Any integer is accepted; ranks outside the point table score nothing.
    pub rank: i64,
    pub kills: u32,
}

impl TeamEntry {
    pub fn new(team: impl Into<String>, rank: i64, kills: u32) -> Self {
        Self {
            team: team.into(),
            rank,
            kills,
        }
    }
}

/// One team's row in a persisted match. Field names follow the CSV header
/// `Group,Team,Rank,Kills,WWCD,PLCT`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Group")]
    pub group: Group,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Rank")]
    pub rank: i64,
    #[serde(rename = "Kills")]
    pub kills: u32,
    /// 1 if the team finished first.
    #[serde(rename = "WWCD")]
    pub won: u32,
    /// Placement points from the point table.
    #[serde(rename = "PLCT")]
    pub points: u32,
}

impl MatchRecord {
    /// Derive the win flag and placement points from the entry's rank.
    pub fn from_entry(group: Group, entry: &TeamEntry) -> Self {
        Self {
            group,
            team: entry.team.clone(),
            rank: entry.rank,
            kills: entry.kills,
            won: wwcd(entry.rank),
            points: placement_points(entry.rank),
        }
    }
}
