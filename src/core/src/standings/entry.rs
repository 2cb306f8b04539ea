use crate::team::{TeamId, TeamRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many recent results a standings row keeps.
pub const FORM_LENGTH: usize = 5;

/// Category, optionally narrowed to one pool. A scope without a pool on a
/// pool-based category covers every pool of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StandingsScope {
    pub category: String,
    pub pool: Option<String>,
}

impl StandingsScope {
    pub fn new(category: &str, pool: Option<&str>) -> Self {
        StandingsScope {
            category: category.to_string(),
            pool: pool.map(String::from),
        }
    }

    pub fn contains(&self, entry: &StandingsEntry) -> bool {
        entry.category == self.category
            && (self.pool.is_none() || entry.pool == self.pool)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormResult {
    W,
    D,
    L,
    F,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    pub result: FormResult,
    pub opponent: TeamRef,
    pub is_home: bool,
    pub points_for: u32,
    pub points_against: u32,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    pub team_id: TeamId,
    pub team_name: String,
    pub category: String,
    pub pool: Option<String>,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub forfeits: u32,
    pub points_for: u64,
    pub points_against: u64,
    pub point_difference: i64,
    pub points: u32,
    pub clean_sheets: u32,
    pub failed_to_score: u32,
    /// Most recent first.
    pub last5: Vec<FormItem>,
    pub position: u32,
}

impl StandingsEntry {
    pub fn new(team: &TeamRef, scope: &StandingsScope) -> Self {
        StandingsEntry {
            team_id: team.id,
            team_name: team.name.clone(),
            category: scope.category.clone(),
            pool: scope.pool.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            forfeits: 0,
            points_for: 0,
            points_against: 0,
            point_difference: 0,
            points: 0,
            clean_sheets: 0,
            failed_to_score: 0,
            last5: Vec::with_capacity(FORM_LENGTH),
            position: 0,
        }
    }

    /// Applies one processed game from this team's point of view.
    pub fn record(&mut self, item: FormItem, competition_points: u32) {
        self.played += 1;

        self.points_for = self.points_for.saturating_add(u64::from(item.points_for));
        self.points_against = self.points_against.saturating_add(u64::from(item.points_against));
        self.point_difference = Self::difference(self.points_for, self.points_against);

        match item.result {
            FormResult::W => self.won += 1,
            FormResult::D => self.drawn += 1,
            FormResult::L => self.lost += 1,
            FormResult::F => {
                self.lost += 1;
                self.forfeits += 1;
            }
        }

        self.points += competition_points;

        if item.points_against == 0 {
            self.clean_sheets += 1;
        }
        if item.points_for == 0 {
            self.failed_to_score += 1;
        }

        self.last5.insert(0, item);
        self.last5.truncate(FORM_LENGTH);
    }

    /// Sort key for the table, compared in descending order.
    pub fn rank_key(&self) -> (u32, i64, u64) {
        (self.points, self.point_difference, self.points_for)
    }

    fn difference(scored: u64, conceded: u64) -> i64 {
        let scored = i64::try_from(scored).unwrap_or(i64::MAX);
        let conceded = i64::try_from(conceded).unwrap_or(i64::MAX);
        scored.saturating_sub(conceded)
    }
}
