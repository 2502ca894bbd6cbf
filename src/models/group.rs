//! Group identifiers and their team rosters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::error::ScoreError;

/// One of the fixed tournament groups.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
    C,
}

const GROUP_A_TEAMS: &[&str] = &[
    "AM BOYZZ Esports", "Team LOSS_X", "MITxSQUADUP", "BOB ESPORTS",
    "Team_OG", "Alpha_x", "TSM", "Team Gardians",
    "Team TED", "INSAS ESPORTS", "CFS ESPORTS", "XSPARK",
    "Team Swarajya", "Team Homelanders", "Team NV", "IMMORTAL THUNDERS",
];

const GROUP_B_TEAMS: &[&str] = &[
    "RushX", "ALPHA GAMING", "Team Arise", "97",
    "Team Trust", "Strawts", "Team Shadow", "Team Ethnic",
    "Curse breakers", "TEAM APEX", "1v4", "AERO SCISSORS ESPORTS",
    "Inferno 5", "6INE", "TEAM RAVEN ESPORTS", "SelfishPlayers",
];

const GROUP_C_TEAMS: &[&str] = &[
    "Team Wushang", "Team Xtreme", "Team Beast", "FST Fraggers",
    "VP GAMING", "Team_OG", "Chaos Knight", "KALKI ESPORTS",
    "Divas", "TEAM NS", "Team Nirbhay", "Team Sword",
    "Flow Esport", "Team Yaurus", "Team KUKD",
];

impl Group {
    /// All groups, in display order.
    pub const ALL: [Group; 3] = [Group::A, Group::B, Group::C];

    /// Single-letter identifier ("A", "B", "C").
    pub fn as_str(self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::C => "C",
        }
    }

    /// Registered teams, used to pre-fill entry forms. Recorded matches may name other teams.
    pub fn roster(self) -> &'static [&'static str] {
        match self {
            Group::A => GROUP_A_TEAMS,
            Group::B => GROUP_B_TEAMS,
            Group::C => GROUP_C_TEAMS,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match only: "a" is not a group.
impl FromStr for Group {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Group::A),
            "B" => Ok(Group::B),
            "C" => Ok(Group::C),
            other => Err(ScoreError::InvalidGroup(other.to_string())),
        }
    }
}
