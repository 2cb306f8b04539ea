use crate::StoreError;
use crate::calendar::Calendar;
use crate::category::Category;
use crate::r#match::{Match, MatchId};
use crate::standings::{StandingsEntry, StandingsScope};
use crate::team::{Team, TeamId, TeamRecord};

/// Read side of the league data the standings engine consumes.
pub trait LeagueSource {
    fn categories(&self) -> Vec<Category>;

    fn category(&self, name: &str) -> Option<Category>;

    fn teams(&self, category: &str) -> Vec<Team>;

    fn team(&self, id: TeamId) -> Option<Team>;

    /// Matches of a category; `Some(pool)` narrows to that pool.
    fn matches(&self, category: &str, pool: Option<&str>) -> Vec<Match>;

    fn match_by_id(&self, id: MatchId) -> Option<Match>;

    fn calendar(&self, category: &str) -> Option<Calendar>;

    fn standings(&self, category: &str, pool: Option<&str>) -> Vec<StandingsEntry>;
}

/// Write side owned by the standings engine.
pub trait StandingsSink {
    /// Deletes every entry in `scope` plus every entry of `team_ids` in the
    /// scope's category (whatever pool it was stored under), then inserts
    /// `entries`. Implementations apply both halves together.
    fn replace_standings(
        &mut self,
        scope: &StandingsScope,
        team_ids: &[TeamId],
        entries: Vec<StandingsEntry>,
    ) -> Result<(), StoreError>;

    fn update_team_record(&mut self, team_id: TeamId, record: TeamRecord) -> Result<(), StoreError>;
}

pub trait LeagueStore: LeagueSource + StandingsSink {}

impl<T: LeagueSource + StandingsSink + ?Sized> LeagueStore for T {}
