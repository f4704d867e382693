use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub name: String,
    pub search_name: String,
    pub total_points: i32,
    pub category: String,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub last_updated: NaiveDateTime,
}

/// Outcome of a single competitive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchResult {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            "draw" => Ok(Self::Draw),
            other => Err(StorageError::InvalidResultType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_result_types() {
        assert_eq!("win".parse::<MatchResult>().unwrap(), MatchResult::Win);
        assert_eq!("loss".parse::<MatchResult>().unwrap(), MatchResult::Loss);
        assert_eq!("draw".parse::<MatchResult>().unwrap(), MatchResult::Draw);
    }

    #[test]
    fn rejects_unknown_result_types() {
        assert!(matches!(
            "victory".parse::<MatchResult>(),
            Err(StorageError::InvalidResultType(s)) if s == "victory"
        ));
        // Matching is case-sensitive.
        assert!("WIN".parse::<MatchResult>().is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for result in [MatchResult::Win, MatchResult::Loss, MatchResult::Draw] {
            assert_eq!(result.as_str().parse::<MatchResult>().unwrap(), result);
        }
    }
}
