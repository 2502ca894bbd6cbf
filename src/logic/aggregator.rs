//! Leaderboard aggregation: per-team totals, tie-broken sort, dense ranks.

use crate::models::{Group, LeaderboardRow, MatchRecord, ScoreError, Scope, Standings};
use crate::storage::MatchStore;
use std::collections::BTreeMap;

/// Aggregate match records into ranked leaderboard rows.
///
/// Records are grouped by exact team name within their group; no case folding or
/// trimming. Rows are ordered by total, then kills, then wins (all descending). Teams
/// equal on all three keep team-name order, which is not part of the contract.
/// No records gives an empty leaderboard.
pub fn rank_records<'a, I>(records: I) -> Vec<LeaderboardRow>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut totals: BTreeMap<(Group, &str), LeaderboardRow> = BTreeMap::new();
    for r in records {
        let row = totals
            .entry((r.group, r.team.as_str()))
            .or_insert_with(|| LeaderboardRow {
                rank: 0,
                team: r.team.clone(),
                group: r.group,
                wins: 0,
                points: 0,
                kills: 0,
            });
        row.wins += u64::from(r.won);
        row.points += u64::from(r.points);
        row.kills += u64::from(r.kills);
    }
    let mut rows: Vec<LeaderboardRow> = totals.into_values().collect();
    sort_and_rank(&mut rows);
    rows
}

/// Sort rows by (total, kills, wins) descending and assign ranks 1..=N.
pub fn sort_and_rank(rows: &mut [LeaderboardRow]) {
    rows.sort_by(|a, b| (b.total(), b.kills, b.wins).cmp(&(a.total(), a.kills, a.wins)));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
}

/// Standings of a single group, recomputed from its match files.
pub fn group_standings(store: &MatchStore, group: Group) -> Result<Standings, ScoreError> {
    let records = store.load_group(group)?;
    Ok(Standings {
        scope: Scope::Group(group),
        match_count: store.match_count(group)?,
        rows: rank_records(&records),
    })
}

/// Standings over all groups pooled and re-ranked globally. A team keeps its group as
/// an attribute; the same name in two groups is two rows.
pub fn combined_standings(store: &MatchStore) -> Result<Standings, ScoreError> {
    let mut records = Vec::new();
    let mut match_count = 0;
    for group in Group::ALL {
        records.extend(store.load_group(group)?);
        match_count += store.match_count(group)?;
    }
    Ok(Standings {
        scope: Scope::Combined,
        match_count,
        rows: rank_records(&records),
    })
}

pub fn standings(store: &MatchStore, scope: Scope) -> Result<Standings, ScoreError> {
    match scope {
        Scope::Group(group) => group_standings(store, group),
        Scope::Combined => combined_standings(store),
    }
}
