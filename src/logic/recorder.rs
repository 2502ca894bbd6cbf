//! Match recording: turn submitted team entries into records and persist them as one match.

use crate::models::{Group, MatchNo, MatchRecord, ScoreError, TeamEntry};
use crate::storage::MatchStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Body of a save-match request. Both fields are optional so a missing one is reported
/// as invalid data rather than a parse failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchSubmission {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub match_data: Option<Vec<TeamEntry>>,
}

/// Reply to a save-match request. `match_no` is only present on success.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SaveMatchResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_no: Option<MatchNo>,
}

impl SaveMatchResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            match_no: None,
        }
    }
}

impl From<&RecordedMatch> for SaveMatchResponse {
    fn from(m: &RecordedMatch) -> Self {
        Self {
            success: true,
            message: format!("Match {} saved successfully!", m.match_no),
            match_no: Some(m.match_no),
        }
    }
}

/// A match that has been written to the store.
#[derive(Clone, Debug)]
pub struct RecordedMatch {
    pub group: Group,
    pub match_no: MatchNo,
    pub records: Vec<MatchRecord>,
    pub path: PathBuf,
}

/// Build one record per entry. Ranks are not checked for uniqueness and team names are
/// not checked against the roster.
pub fn build_match_records(group: Group, entries: &[TeamEntry]) -> Result<Vec<MatchRecord>, ScoreError> {
    if entries.is_empty() {
        return Err(ScoreError::EmptyMatch);
    }
    Ok(entries
        .iter()
        .map(|entry| MatchRecord::from_entry(group, entry))
        .collect())
}

/// Record a match for `group` under the next sequence number (existing matches + 1).
///
/// The group lock is held from counting until the file is in place, so concurrent
/// recordings for the same group get distinct, gapless numbers.
pub fn record_match(
    store: &MatchStore,
    group: Group,
    entries: &[TeamEntry],
) -> Result<RecordedMatch, ScoreError> {
    let records = build_match_records(group, entries)?;
    let _guard = store.lock_group(group);
    let match_no = store.next_match_no(group)?;
    let path = store.write_match(group, match_no, &records)?;
    log::info!(
        "Recorded match {} for Group {} ({} teams)",
        match_no,
        group,
        records.len()
    );
    Ok(RecordedMatch {
        group,
        match_no,
        records,
        path,
    })
}

/// Validate a raw submission and record it.
pub fn record_submission(
    store: &MatchStore,
    submission: &MatchSubmission,
) -> Result<RecordedMatch, ScoreError> {
    let group: Group = submission
        .group
        .as_deref()
        .ok_or_else(|| ScoreError::InvalidGroup(String::new()))?
        .parse()?;
    let entries = submission.match_data.as_deref().unwrap_or_default();
    record_match(store, group, entries)
}
