use crate::DatabaseEntity;
use league_core::{
    Calendar, Category, LeagueSource, Match, MatchId, MatchValidator, StandingsEntry, StandingsError,
    StandingsScope, StandingsSink, StoreError, Team, TeamId, TeamRecord,
};
use log::debug;

/// In-memory document store. Callers hold it behind one lock, so a
/// standings replacement is never observed half-applied.
#[derive(Debug, Clone, Default)]
pub struct LeagueDatabase {
    categories: Vec<Category>,
    teams: Vec<Team>,
    matches: Vec<Match>,
    calendars: Vec<Calendar>,
    standings: Vec<StandingsEntry>,
}

impl LeagueDatabase {
    pub fn new(data: DatabaseEntity) -> Self {
        LeagueDatabase {
            categories: data.categories,
            teams: data.teams,
            matches: data.matches,
            calendars: data.calendars,
            standings: data.standings,
        }
    }

    pub fn to_entity(&self) -> DatabaseEntity {
        DatabaseEntity {
            categories: self.categories.clone(),
            teams: self.teams.clone(),
            matches: self.matches.clone(),
            calendars: self.calendars.clone(),
            standings: self.standings.clone(),
        }
    }

    pub fn all_teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn all_matches(&self) -> &[Match] {
        &self.matches
    }

    fn next_match_id(&self) -> MatchId {
        self.matches.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }

    fn validate_match(&self, m: &Match) -> Result<(), StandingsError> {
        let category = self
            .category(&m.category)
            .ok_or_else(|| StandingsError::CategoryNotFound(m.category.clone()))?;

        MatchValidator::validate(
            m,
            &category,
            self.teams.iter().find(|t| t.id == m.home_team_id),
            self.teams.iter().find(|t| t.id == m.away_team_id),
        )
    }

    /// Stores a new match under a fresh id.
    pub fn create_match(&mut self, mut m: Match) -> Result<Match, StandingsError> {
        m.id = self.next_match_id();

        self.validate_match(&m)?;
        self.matches.push(m.clone());

        debug!("match {} created in {}", m.id, m.category);

        Ok(m)
    }

    pub fn update_match(&mut self, m: Match) -> Result<Match, StandingsError> {
        self.validate_match(&m)?;

        let existing = self
            .matches
            .iter_mut()
            .find(|existing| existing.id == m.id)
            .ok_or(StandingsError::MatchNotFound(m.id))?;

        *existing = m.clone();

        Ok(m)
    }

    /// Creates or replaces the calendar of a category. Returns true on creation.
    pub fn put_calendar(&mut self, calendar: Calendar) -> Result<bool, StandingsError> {
        let category = self
            .category(&calendar.category)
            .ok_or_else(|| StandingsError::CategoryNotFound(calendar.category.clone()))?;

        for pool in &calendar.pools {
            category.validate_pool(pool.name.as_deref())?;
        }

        match self.calendars.iter_mut().find(|c| c.category == calendar.category) {
            Some(existing) => {
                *existing = calendar;
                Ok(false)
            }
            None => {
                self.calendars.push(calendar);
                Ok(true)
            }
        }
    }
}

impl LeagueSource for LeagueDatabase {
    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn category(&self, name: &str) -> Option<Category> {
        self.categories.iter().find(|c| c.name == name).cloned()
    }

    fn teams(&self, category: &str) -> Vec<Team> {
        self.teams
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect()
    }

    fn team(&self, id: TeamId) -> Option<Team> {
        self.teams.iter().find(|t| t.id == id).cloned()
    }

    fn matches(&self, category: &str, pool: Option<&str>) -> Vec<Match> {
        self.matches
            .iter()
            .filter(|m| m.category == category)
            .filter(|m| pool.is_none() || m.pool.as_deref() == pool)
            .cloned()
            .collect()
    }

    fn match_by_id(&self, id: MatchId) -> Option<Match> {
        self.matches.iter().find(|m| m.id == id).cloned()
    }

    fn calendar(&self, category: &str) -> Option<Calendar> {
        self.calendars.iter().find(|c| c.category == category).cloned()
    }

    fn standings(&self, category: &str, pool: Option<&str>) -> Vec<StandingsEntry> {
        let scope = StandingsScope::new(category, pool);

        self.standings
            .iter()
            .filter(|e| scope.contains(e))
            .cloned()
            .collect()
    }
}

impl StandingsSink for LeagueDatabase {
    fn replace_standings(
        &mut self,
        scope: &StandingsScope,
        team_ids: &[TeamId],
        entries: Vec<StandingsEntry>,
    ) -> Result<(), StoreError> {
        let before = self.standings.len();

        self.standings.retain(|e| {
            let in_scope = scope.contains(e);
            let moved_team = e.category == scope.category && team_ids.contains(&e.team_id);
            !(in_scope || moved_team)
        });

        debug!(
            "standings {} {:?}: {} removed, {} inserted",
            scope.category,
            scope.pool,
            before - self.standings.len(),
            entries.len()
        );

        self.standings.extend(entries);

        Ok(())
    }

    fn update_team_record(&mut self, team_id: TeamId, record: TeamRecord) -> Result<(), StoreError> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| StoreError::NotFound(format!("team {}", team_id)))?;

        team.aggregate_record = record;

        Ok(())
    }
}
