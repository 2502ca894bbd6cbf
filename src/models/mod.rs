//! Data structures for the points table: groups, point system, match records, standings.

mod error;
mod group;
mod points;
mod record;
mod standings;

pub use error::ScoreError;
pub use group::Group;
pub use points::{placement_points, wwcd, POINT_TABLE};
pub use record::{MatchNo, MatchRecord, TeamEntry};
pub use standings::{LeaderboardRow, Scope, Standings};
