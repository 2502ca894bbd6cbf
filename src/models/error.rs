//! Errors returned by recording, aggregation and rendering.

use crate::models::group::Group;
use crate::models::record::MatchNo;
use crate::models::standings::Scope;

/// Errors that can occur while recording matches or building standings.
#[derive(Debug)]
pub enum ScoreError {
    /// Group identifier is not one of A, B, C.
    InvalidGroup(String),
    /// A match submission with no team entries.
    EmptyMatch,
    /// Nothing has been recorded for this scope (report requested anyway).
    NoData(Scope),
    /// The target match file already exists.
    MatchExists { group: Group, match_no: MatchNo },
    Io(std::io::Error),
    Csv(csv::Error),
}

impl ScoreError {
    /// Caller supplied bad input (as opposed to a storage failure).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScoreError::InvalidGroup(_) | ScoreError::EmptyMatch)
    }
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::InvalidGroup(g) => write!(f, "Invalid group: {:?}", g),
            ScoreError::EmptyMatch => write!(f, "Invalid data: no teams in match"),
            ScoreError::NoData(scope) => match scope {
                Scope::Group(g) => write!(f, "No data available for Group {}", g),
                Scope::Combined => write!(f, "No data available"),
            },
            ScoreError::MatchExists { group, match_no } => {
                write!(f, "Match {} for Group {} already exists", match_no, group)
            }
            ScoreError::Io(e) => write!(f, "Storage error: {}", e),
            ScoreError::Csv(e) => write!(f, "Match file error: {}", e),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::Io(e) => Some(e),
            ScoreError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScoreError {
    fn from(e: std::io::Error) -> Self {
        ScoreError::Io(e)
    }
}

impl From<csv::Error> for ScoreError {
    fn from(e: csv::Error) -> Self {
        ScoreError::Csv(e)
    }
}
