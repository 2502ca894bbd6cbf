//! CSV match store: one folder per group, one file per match.
//!
//! Layout under the data root:
//! `Group_A_Data/group_A_match_1.csv`, `Group_A_Data/group_A_match_2.csv`, ...
//! Each file has the header `Group,Team,Rank,Kills,WWCD,PLCT` and one row per team.

use crate::models::{Group, MatchNo, MatchRecord, ScoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// File-backed store of recorded matches.
#[derive(Debug)]
pub struct MatchStore {
    root: PathBuf,
    /// One lock per group, indexed like `Group::ALL`.
    locks: [Mutex<()>; 3],
}

impl MatchStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: [Mutex::new(()), Mutex::new(()), Mutex::new(())],
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the per-group data folders if missing.
    pub fn ensure_layout(&self) -> Result<(), ScoreError> {
        for group in Group::ALL {
            fs::create_dir_all(self.group_dir(group))?;
        }
        Ok(())
    }

    pub fn group_dir(&self, group: Group) -> PathBuf {
        self.root.join(format!("Group_{}_Data", group))
    }

    pub fn match_path(&self, group: Group, match_no: MatchNo) -> PathBuf {
        self.group_dir(group)
            .join(format!("group_{}_match_{}.csv", group, match_no))
    }

    /// Serialize "count, then write" for one group. Hold the guard across both steps.
    pub fn lock_group(&self, group: Group) -> MutexGuard<'_, ()> {
        let idx = match group {
            Group::A => 0,
            Group::B => 1,
            Group::C => 2,
        };
        // The mutex guards no data, so a poisoned lock is still usable.
        self.locks[idx].lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Match numbers found on disk for `group`, ascending. Missing folder means none.
    pub fn match_numbers(&self, group: Group) -> Result<Vec<MatchNo>, ScoreError> {
        let dir = self.group_dir(group);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let prefix = format!("group_{}_match_", group);
        let mut numbers = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let number = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".csv"))
                .and_then(|n| n.parse::<MatchNo>().ok());
            if let Some(n) = number {
                numbers.push(n);
            }
        }
        numbers.sort_unstable();
        Ok(numbers)
    }

    /// Number of recorded matches for `group`.
    pub fn match_count(&self, group: Group) -> Result<usize, ScoreError> {
        Ok(self.match_numbers(group)?.len())
    }

    /// Sequence number the next recorded match will get: count + 1.
    pub fn next_match_no(&self, group: Group) -> Result<MatchNo, ScoreError> {
        Ok(self.match_count(group)? as MatchNo + 1)
    }

    /// All team rows of one match file.
    pub fn read_match(&self, group: Group, match_no: MatchNo) -> Result<Vec<MatchRecord>, ScoreError> {
        let mut reader = csv::Reader::from_path(self.match_path(group, match_no))?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    /// Every record of every match of `group`, in match order.
    pub fn load_group(&self, group: Group) -> Result<Vec<MatchRecord>, ScoreError> {
        let mut records = Vec::new();
        for match_no in self.match_numbers(group)? {
            records.extend(self.read_match(group, match_no)?);
        }
        Ok(records)
    }

    /// Write a whole match as one file. The rows go to a temp file first, which is then
    /// hard-linked to the match name. Linking fails if the name already exists, so an
    /// existing match is never replaced, even by another process sharing the data folder.
    /// A failed write leaves no match file behind.
    pub fn write_match(
        &self,
        group: Group,
        match_no: MatchNo,
        records: &[MatchRecord],
    ) -> Result<PathBuf, ScoreError> {
        let dir = self.group_dir(group);
        fs::create_dir_all(&dir)?;
        let target = self.match_path(group, match_no);
        let tmp = dir.join(format!(".group_{}_match_{}.{}.tmp", group, match_no, Uuid::new_v4()));
        let written = write_csv(&tmp, records).and_then(|()| {
            fs::hard_link(&tmp, &target).map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ScoreError::MatchExists { group, match_no },
                _ => e.into(),
            })
        });
        if let Err(e) = fs::remove_file(&tmp).or_else(|e| match e.kind() {
            ErrorKind::NotFound => Ok(()),
            _ => Err(e),
        }) {
            log::warn!("Could not remove temp file {}: {}", tmp.display(), e);
        }
        written.map(|()| target)
    }
}

fn write_csv(path: &Path, records: &[MatchRecord]) -> Result<(), ScoreError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
