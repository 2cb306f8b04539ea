use crate::calendar::CalendarScore;
use crate::r#match::{Forfeit, MatchStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Season schedule of one category, entered in bulk.
/// Teams are referenced by display name, pools by nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub category: String,
    #[serde(default)]
    pub pools: Vec<CalendarPool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPool {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub matchdays: Vec<Matchday>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchday {
    pub number: u32,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub matches: Vec<CalendarMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMatch {
    pub home_team_name: String,
    pub away_team_name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub home_score: Option<CalendarScore>,
    #[serde(default)]
    pub away_score: Option<CalendarScore>,
    #[serde(default)]
    pub forfeit: Forfeit,
}

impl CalendarMatch {
    pub fn new(home_team_name: &str, away_team_name: &str) -> Self {
        CalendarMatch {
            home_team_name: home_team_name.to_string(),
            away_team_name: away_team_name.to_string(),
            date: None,
            time: None,
            venue: None,
            status: None,
            home_score: None,
            away_score: None,
            forfeit: Forfeit::None,
        }
    }

    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_score = Some(home.into());
        self.away_score = Some(away.into());
        self
    }

    pub fn with_forfeit(mut self, forfeit: Forfeit) -> Self {
        self.forfeit = forfeit;
        self
    }

    /// Rows without an explicit status count as played once both scores are filled in.
    pub fn effective_status(&self) -> MatchStatus {
        match self.status {
            Some(status) => status,
            None if self.home_score.is_some() && self.away_score.is_some() => {
                MatchStatus::Completed
            }
            None => MatchStatus::Upcoming,
        }
    }
}

impl Calendar {
    pub fn new(category: &str, pools: Vec<CalendarPool>) -> Self {
        Calendar {
            category: category.to_string(),
            pools,
        }
    }

    pub fn match_count(&self) -> usize {
        self.pools
            .iter()
            .flat_map(|p| &p.matchdays)
            .map(|d| d.matches.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_status() {
        let upcoming = CalendarMatch::new("A", "B");
        assert_eq!(upcoming.effective_status(), MatchStatus::Upcoming);

        let played = CalendarMatch::new("A", "B").with_score(70, 66);
        assert_eq!(played.effective_status(), MatchStatus::Completed);

        let mut live = CalendarMatch::new("A", "B").with_score(10, 12);
        live.status = Some(MatchStatus::Live);
        assert_eq!(live.effective_status(), MatchStatus::Live);
    }

    #[test]
    fn test_deserialize_nested_calendar() {
        let json = r#"{
            "category": "U17",
            "pools": [{
                "name": "A",
                "matchdays": [{
                    "number": 1,
                    "date": "2024-10-12",
                    "matches": [
                        {"homeTeamName": "Lions", "awayTeamName": "Tigers", "homeScore": "54", "awayScore": 50}
                    ]
                }]
            }]
        }"#;

        let calendar: Calendar = serde_json::from_str(json).unwrap();
        assert_eq!(calendar.match_count(), 1);

        assert_eq!(calendar.pools[0].name.as_deref(), Some("A"));
        let m = &calendar.pools[0].matchdays[0].matches[0];
        assert_eq!(m.home_score.as_ref().and_then(CalendarScore::value), Some(54));
        assert_eq!(m.effective_status(), MatchStatus::Completed);
    }
}
