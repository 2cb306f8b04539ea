use crate::r#match::{Forfeit, MatchStatus};
use crate::team::TeamId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type MatchId = u32;

/// Highest score accepted for one side of a game.
pub const MAX_SCORE: u32 = 500;

/// Canonical match record, teams referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub category: String,
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub forfeit: Forfeit,
    #[serde(default)]
    pub matchday: Option<u32>,
    /// Set on records carried over from the historical import.
    #[serde(default)]
    pub imported: bool,
}

impl Match {
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Both scores, only once the match is completed.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if !self.is_completed() {
            return None;
        }

        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn counts_for_standings(&self) -> bool {
        self.final_score().is_some()
    }
}
