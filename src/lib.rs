//! BGMI tournament points table: library with models, match recording, standings and reports.

pub mod config;
pub mod logic;
pub mod models;
pub mod report;
pub mod storage;

pub use config::AppConfig;
pub use logic::{
    build_match_records, combined_standings, group_standings, rank_records, record_match,
    record_submission, sort_and_rank, standings, MatchSubmission, RecordedMatch,
    SaveMatchResponse,
};
pub use models::{
    placement_points, wwcd, Group, LeaderboardRow, MatchNo, MatchRecord, ScoreError, Scope,
    Standings, TeamEntry, POINT_TABLE,
};
pub use storage::MatchStore;
