//! Points table business logic: match recording and leaderboard aggregation.

mod aggregator;
mod recorder;

pub use aggregator::{combined_standings, group_standings, rank_records, sort_and_rank, standings};
pub use recorder::{
    build_match_records, record_match, record_submission, MatchSubmission, RecordedMatch,
    SaveMatchResponse,
};
