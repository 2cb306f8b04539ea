use crate::r#match::MatchId;
use crate::standings::{
    CategoryInput, Diagnostic, LeagueEvent, ResultAggregator, StandingsEntry, StandingsRanking,
    StandingsScope, StandingsSource,
};
use crate::store::{LeagueSource, LeagueStore};
use crate::team::{TeamId, TeamRecord};
use crate::utils::{Logging, TimeEstimation};
use crate::StandingsError;
use log::{debug, error, info};
use rayon::prelude::*;
use serde::Serialize;

/// Result of one recalculation: the new rows of every scope it covered plus
/// whatever input problems were skipped on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recalculation {
    pub category: String,
    pub pool: Option<String>,
    pub source: StandingsSource,
    /// Grouped by pool, each group ordered by position.
    pub entries: Vec<StandingsEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Recalculation {
    pub fn scope(&self) -> StandingsScope {
        StandingsScope::new(&self.category, self.pool.as_deref())
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.entries.iter().map(|e| e.team_id).collect()
    }

    pub fn entry(&self, team_id: TeamId) -> Option<&StandingsEntry> {
        self.entries.iter().find(|e| e.team_id == team_id)
    }
}

pub struct StandingsEngine;

impl StandingsEngine {
    /// Rebuilds the standings of a category, or of one of its pools, from
    /// the full result history and replaces whatever was stored for it.
    pub fn recalculate<S: LeagueStore + ?Sized>(
        store: &mut S,
        category: &str,
        pool: Option<&str>,
    ) -> Result<Recalculation, StandingsError> {
        let (result, elapsed) = TimeEstimation::estimate(|| -> Result<Recalculation, StandingsError> {
            let input = CategoryInput::collect(&*store, category, pool)?;
            let recalculation = Self::compute(input);

            Self::persist(store, &recalculation)?;

            Ok(recalculation)
        });

        if let Ok(recalculation) = &result {
            info!(
                "🏀 standings recalculated: {} {:?} from {:?}, {} teams, {} diagnostics, {} ms",
                category,
                pool,
                recalculation.source,
                recalculation.entries.len(),
                recalculation.diagnostics.len(),
                elapsed
            );
        }

        result
    }

    /// Recalculates every category. Inputs are read first, the tables are
    /// computed in parallel, then written one category at a time.
    pub fn recalculate_all<S: LeagueStore + ?Sized>(
        store: &mut S,
    ) -> Vec<(String, Result<Recalculation, StandingsError>)> {
        let inputs: Vec<(String, Result<CategoryInput, StandingsError>)> = store
            .categories()
            .into_iter()
            .map(|category| {
                let input = CategoryInput::collect(&*store, &category.name, None);
                (category.name, input)
            })
            .collect();

        let computed: Vec<(String, Result<Recalculation, StandingsError>)> = inputs
            .into_par_iter()
            .map(|(name, input)| {
                let message = format!("compute standings: {}", name);
                let result = input.map(|input| Logging::estimate_result(|| Self::compute(input), &message));
                (name, result)
            })
            .collect();

        computed
            .into_iter()
            .map(|(name, result)| {
                let result = result.and_then(|recalculation| {
                    Self::persist(store, &recalculation)?;
                    Ok(recalculation)
                });

                if let Err(err) = &result {
                    error!("standings recalculation failed for {}: {}", name, err);
                }

                (name, result)
            })
            .collect()
    }

    /// Pure part of a recalculation: aggregate and rank every scope.
    pub fn compute(input: CategoryInput) -> Recalculation {
        let entries = input
            .scopes
            .iter()
            .flat_map(|scope_input| {
                let table = ResultAggregator::aggregate(
                    &scope_input.matches,
                    &scope_input.scope,
                    &scope_input.members,
                );

                StandingsRanking::rank(table.into_values().collect())
            })
            .collect();

        Recalculation {
            category: input.category.name,
            pool: input.pool,
            source: input.source,
            entries,
            diagnostics: input.diagnostics,
        }
    }

    fn persist<S: LeagueStore + ?Sized>(store: &mut S, recalculation: &Recalculation) -> Result<(), StandingsError> {
        store.replace_standings(
            &recalculation.scope(),
            &recalculation.team_ids(),
            recalculation.entries.clone(),
        )?;

        for entry in &recalculation.entries {
            store.update_team_record(entry.team_id, TeamRecord::from(entry))?;
        }

        Ok(())
    }

    /// Recalculates the scope of a match once it is completed with both scores.
    /// Returns `None` when the match does not count yet.
    pub fn on_match_completed<S: LeagueStore + ?Sized>(
        store: &mut S,
        match_id: MatchId,
    ) -> Result<Option<Recalculation>, StandingsError> {
        let m = store
            .match_by_id(match_id)
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        if !m.counts_for_standings() {
            debug!("match {} does not count for standings yet", match_id);
            return Ok(None);
        }

        Self::recalculate(store, &m.category, m.pool.as_deref()).map(Some)
    }

    pub fn on_calendar_written<S: LeagueStore + ?Sized>(
        store: &mut S,
        category: &str,
    ) -> Result<Recalculation, StandingsError> {
        Self::recalculate(store, category, None)
    }

    /// Side-effect entry point for the write handlers. Failures are logged
    /// and swallowed; the triggering write has already succeeded.
    pub fn handle<S: LeagueStore + ?Sized>(store: &mut S, event: &LeagueEvent) -> Option<Recalculation> {
        let result = match event {
            LeagueEvent::MatchCompleted(match_id) => Self::on_match_completed(store, *match_id),
            LeagueEvent::CalendarWritten(category) => Self::on_calendar_written(store, category).map(Some),
        };

        match result {
            Ok(recalculation) => recalculation,
            Err(err) => {
                error!("standings not refreshed after {:?}: {}", event, err);
                None
            }
        }
    }

    /// Stored standings of a category or pool, ordered by pool then position.
    pub fn standings<S: LeagueSource + ?Sized>(
        store: &S,
        category: &str,
        pool: Option<&str>,
    ) -> Result<Vec<StandingsEntry>, StandingsError> {
        let config = store
            .category(category)
            .ok_or_else(|| StandingsError::CategoryNotFound(category.to_string()))?;

        if pool.is_some() {
            config.validate_pool(pool)?;
        }

        let mut entries = store.standings(category, pool);
        entries.sort_by(|a, b| (&a.pool, a.position).cmp(&(&b.pool, b.position)));

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Calendar, CalendarMatch, CalendarPool, Matchday};
    use crate::category::Category;
    use crate::r#match::{Forfeit, Match, MatchStatus};
    use crate::standings::DiagnosticKind;
    use crate::store::testing::TestStore;
    use crate::team::Team;
    use crate::StoreError;
    use chrono::NaiveDate;

    fn game(id: u32, home: u32, away: u32, score: Option<(u32, u32)>, forfeit: Forfeit) -> Match {
        Match {
            id,
            date: NaiveDate::from_ymd_opt(2024, 10, id).unwrap(),
            time: Some("20:00".to_string()),
            home_team_id: home,
            away_team_id: away,
            category: "X".to_string(),
            pool: None,
            venue: "Gymnase".to_string(),
            status: MatchStatus::Completed,
            home_score: score.map(|s| s.0),
            away_score: score.map(|s| s.1),
            forfeit,
            matchday: Some(1),
            imported: false,
        }
    }

    fn flat_store() -> TestStore {
        TestStore {
            categories: vec![Category::new("X")],
            teams: vec![
                Team::new(1, "A", "X", None),
                Team::new(2, "B", "X", None),
                Team::new(3, "C", "X", None),
                Team::new(4, "D", "X", None),
                Team::new(5, "E", "X", None),
            ],
            matches: vec![
                game(1, 1, 2, Some((60, 40)), Forfeit::None),
                game(2, 3, 4, Some((20, 0)), Forfeit::Away),
            ],
            ..TestStore::default()
        }
    }

    fn pooled_calendar(pool_of_c: &str) -> Calendar {
        let other = if pool_of_c == "A" { "B" } else { "A" };

        Calendar::new(
            "U15",
            vec![
                CalendarPool {
                    name: Some(pool_of_c.to_string()),
                    matchdays: vec![Matchday {
                        number: 1,
                        date: NaiveDate::from_ymd_opt(2024, 11, 2),
                        matches: vec![CalendarMatch::new("Cobras", "Lions").with_score(48, 44)],
                    }],
                },
                CalendarPool {
                    name: Some(other.to_string()),
                    matchdays: vec![Matchday {
                        number: 1,
                        date: NaiveDate::from_ymd_opt(2024, 11, 2),
                        matches: vec![CalendarMatch::new("Tigers", "Bears").with_score(30, 52)],
                    }],
                },
            ],
        )
    }

    fn pooled_store() -> TestStore {
        TestStore {
            categories: vec![Category::with_pools("U15", &["A", "B"])],
            teams: vec![
                Team::new(10, "Lions", "U15", Some("A")),
                Team::new(11, "Cobras", "U15", Some("A")),
                Team::new(12, "Tigers", "U15", Some("B")),
                Team::new(13, "Bears", "U15", Some("B")),
            ],
            calendars: vec![pooled_calendar("A")],
            ..TestStore::default()
        }
    }

    #[test]
    fn test_recalculate_flat_matches() {
        let mut store = flat_store();

        let recalculation = StandingsEngine::recalculate(&mut store, "X", None).unwrap();
        assert_eq!(recalculation.source, StandingsSource::Matches);

        let order: Vec<u32> = recalculation.entries.iter().map(|e| e.team_id).collect();
        assert_eq!(order, vec![1, 3, 2, 5, 4]);

        let d = recalculation.entry(4).unwrap();
        assert_eq!((d.lost, d.points, d.forfeits, d.point_difference), (1, 0, 1, -20));

        // Idle roster team is listed with a clean record.
        let e = recalculation.entry(5).unwrap();
        assert_eq!((e.played, e.points, e.position), (0, 0, 4));

        assert_eq!(store.standings.len(), 5);
        assert_eq!(store.teams[0].aggregate_record.points, 2);
        assert_eq!(store.teams[0].aggregate_record.position, 1);
    }

    #[test]
    fn test_recalculate_is_idempotent() {
        let mut store = flat_store();

        let first = StandingsEngine::recalculate(&mut store, "X", None).unwrap();
        let stored_first = store.standings.clone();
        let second = StandingsEngine::recalculate(&mut store, "X", None).unwrap();

        assert_eq!(first, second);
        assert_eq!(stored_first, store.standings);
    }

    #[test]
    fn test_incomplete_matches_are_skipped_with_diagnostics() {
        let mut store = flat_store();
        store.matches.push(game(3, 1, 5, None, Forfeit::None));
        store.matches.push(game(4, 2, 99, Some((50, 10)), Forfeit::None));

        let mut upcoming = game(5, 2, 5, None, Forfeit::None);
        upcoming.status = MatchStatus::Upcoming;
        store.matches.push(upcoming);

        let recalculation = StandingsEngine::recalculate(&mut store, "X", None).unwrap();

        let kinds: Vec<DiagnosticKind> = recalculation.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiagnosticKind::MissingScore, DiagnosticKind::UnknownTeam]);
        assert_eq!(recalculation.entry(1).unwrap().played, 1);
        assert_eq!(recalculation.entry(2).unwrap().played, 1);
    }

    #[test]
    fn test_oversized_scores_are_skipped() {
        let mut store = flat_store();
        store.matches.push(game(3, 1, 5, Some((4_000_000_000, 10)), Forfeit::None));
        store.matches.push(game(4, 1, 5, Some((4_000_000_000, 10)), Forfeit::None));

        let recalculation = StandingsEngine::recalculate(&mut store, "X", None).unwrap();

        let kinds: Vec<DiagnosticKind> = recalculation.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiagnosticKind::ImplausibleScore, DiagnosticKind::ImplausibleScore]);

        let a = recalculation.entry(1).unwrap();
        assert_eq!((a.played, a.points_for), (1, 60));
    }

    #[test]
    fn test_canonical_matches_of_calendar_category_are_reported() {
        let mut store = pooled_store();

        let mut extra = game(7, 10, 11, Some((70, 30)), Forfeit::None);
        extra.category = "U15".to_string();
        extra.pool = Some("A".to_string());
        store.matches.push(extra);

        let mut later = game(8, 12, 13, None, Forfeit::None);
        later.category = "U15".to_string();
        later.pool = Some("B".to_string());
        later.status = MatchStatus::Upcoming;
        store.matches.push(later);

        let recalculation = StandingsEngine::recalculate(&mut store, "U15", Some("A")).unwrap();

        assert_eq!(recalculation.diagnostics.len(), 1);
        let diagnostic = &recalculation.diagnostics[0];
        assert_eq!(diagnostic.kind, DiagnosticKind::IgnoredMatch);
        assert_eq!(diagnostic.match_id, Some(7));
        assert_eq!(diagnostic.pool.as_deref(), Some("A"));

        assert_eq!(recalculation.entry(10).unwrap().played, 1);
    }

    #[test]
    fn test_unknown_category_is_fatal() {
        let mut store = flat_store();

        let err = StandingsEngine::recalculate(&mut store, "Y", None).unwrap_err();
        assert_eq!(err, StandingsError::CategoryNotFound("Y".to_string()));
        assert!(store.standings.is_empty());
    }

    #[test]
    fn test_undeclared_pool_is_fatal() {
        let mut store = pooled_store();

        let err = StandingsEngine::recalculate(&mut store, "U15", Some("Z")).unwrap_err();
        assert!(matches!(err, StandingsError::UndeclaredPool { .. }));
        assert!(store.standings.is_empty());
    }

    #[test]
    fn test_calendar_pools_are_ranked_separately() {
        let mut store = pooled_store();

        let recalculation = StandingsEngine::recalculate(&mut store, "U15", None).unwrap();
        assert_eq!(recalculation.source, StandingsSource::Calendar);
        assert_eq!(recalculation.entries.len(), 4);

        let pool_a: Vec<(u32, u32)> = recalculation
            .entries
            .iter()
            .filter(|e| e.pool.as_deref() == Some("A"))
            .map(|e| (e.team_id, e.position))
            .collect();
        assert_eq!(pool_a, vec![(11, 1), (10, 2)]);

        let bears = recalculation.entry(13).unwrap();
        assert_eq!((bears.pool.as_deref(), bears.position, bears.points), (Some("B"), 1, 2));
    }

    #[test]
    fn test_pool_reassignment_leaves_no_orphans() {
        let mut store = pooled_store();
        StandingsEngine::recalculate(&mut store, "U15", None).unwrap();

        // Cobras move to pool B with Lions; Tigers and Bears move to A.
        store.calendars = vec![pooled_calendar("B")];
        StandingsEngine::recalculate(&mut store, "U15", Some("B")).unwrap();

        let cobras: Vec<&StandingsEntry> = store.standings.iter().filter(|e| e.team_id == 11).collect();
        assert_eq!(cobras.len(), 1);
        assert_eq!(cobras[0].pool.as_deref(), Some("B"));

        let stored = StandingsEngine::standings(&store, "U15", Some("B")).unwrap();
        let ids: Vec<u32> = stored.iter().map(|e| e.team_id).collect();
        assert_eq!(ids, vec![11, 10]);
    }

    #[test]
    fn test_unresolved_calendar_name_is_reported() {
        let mut store = pooled_store();
        store.calendars[0].pools[0].matchdays[0]
            .matches
            .push(CalendarMatch::new("Lion", "Cobras").with_score(70, 20));

        let recalculation = StandingsEngine::recalculate(&mut store, "U15", Some("A")).unwrap();

        assert_eq!(recalculation.diagnostics.len(), 1);
        assert_eq!(recalculation.diagnostics[0].kind, DiagnosticKind::UnresolvedTeam);
        assert_eq!(recalculation.entry(11).unwrap().played, 1);
        assert_eq!(recalculation.entry(11).unwrap().won, 1);
    }

    #[test]
    fn test_handle_swallows_failures() {
        let mut store = flat_store();
        store.fail_writes = true;

        let result = StandingsEngine::handle(&mut store, &LeagueEvent::MatchCompleted(1));
        assert!(result.is_none());

        let missing = StandingsEngine::handle(&mut store, &LeagueEvent::MatchCompleted(404));
        assert!(missing.is_none());
    }

    #[test]
    fn test_on_match_completed_ignores_unfinished_matches() {
        let mut store = flat_store();
        store.matches[0].status = MatchStatus::Live;

        assert_eq!(StandingsEngine::on_match_completed(&mut store, 1), Ok(None));
        assert!(store.standings.is_empty());

        store.matches[0].status = MatchStatus::Completed;
        let recalculation = StandingsEngine::on_match_completed(&mut store, 1).unwrap();
        assert!(recalculation.is_some());
    }

    #[test]
    fn test_store_errors_propagate() {
        let mut store = flat_store();
        store.fail_writes = true;

        let err = StandingsEngine::recalculate(&mut store, "X", None).unwrap_err();
        assert!(matches!(err, StandingsError::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_recalculate_all_covers_every_category() {
        let mut store = pooled_store();
        let flat = flat_store();
        store.categories.extend(flat.categories);
        store.teams.extend(flat.teams);
        store.matches.extend(flat.matches);
        store.categories.push(Category::new("EMPTY"));

        let results = StandingsEngine::recalculate_all(&mut store);

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|(_, r)| r.is_ok()));
        assert_eq!(store.standings.len(), 9);
    }
}
