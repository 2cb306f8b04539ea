use crate::standings::{FormResult, StandingsEntry};
use serde::{Deserialize, Serialize};

/// Denormalized copy of a team's current standings counters, stored on the team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub forfeits: u32,
    pub points_for: u64,
    pub points_against: u64,
    pub point_difference: i64,
    pub points: u32,
    pub position: u32,
    pub form: Vec<FormResult>,
}

impl From<&StandingsEntry> for TeamRecord {
    fn from(entry: &StandingsEntry) -> Self {
        TeamRecord {
            played: entry.played,
            won: entry.won,
            drawn: entry.drawn,
            lost: entry.lost,
            forfeits: entry.forfeits,
            points_for: entry.points_for,
            points_against: entry.points_against,
            point_difference: entry.point_difference,
            points: entry.points,
            position: entry.position,
            form: entry.last5.iter().map(|item| item.result).collect(),
        }
    }
}
