use crate::category::Category;
use crate::r#match::MAX_SCORE;
use crate::store::LeagueSource;
use crate::standings::{CalendarResolver, Diagnostic, DiagnosticKind, ResolvedMatch, StandingsScope};
use crate::team::{TeamCollection, TeamRef};
use crate::StandingsError;
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

/// Where a recalculation took its results from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsSource {
    Calendar,
    Matches,
}

/// Everything needed to build one standings table, already read from the store.
#[derive(Debug, Clone)]
pub struct ScopeInput {
    pub scope: StandingsScope,
    pub members: Vec<TeamRef>,
    pub matches: Vec<ResolvedMatch>,
}

#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub category: Category,
    pub pool: Option<String>,
    pub source: StandingsSource,
    pub scopes: Vec<ScopeInput>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CategoryInput {
    /// Reads the inputs of a recalculation. The category's calendar wins
    /// over the flat match list when one exists.
    pub fn collect<S: LeagueSource + ?Sized>(
        store: &S,
        category: &str,
        pool: Option<&str>,
    ) -> Result<Self, StandingsError> {
        let category = store
            .category(category)
            .ok_or_else(|| StandingsError::CategoryNotFound(category.to_string()))?;

        let scopes = category.scopes(pool)?;
        let roster = TeamCollection::new(&category.name, store.teams(&category.name));

        let (source, scopes, diagnostics) = match store.calendar(&category.name) {
            Some(calendar) => {
                for calendar_pool in &calendar.pools {
                    category.validate_pool(calendar_pool.name.as_deref())?;
                }

                let resolution = CalendarResolver::resolve(&calendar, &roster);

                let inputs = scopes
                    .into_iter()
                    .map(|scope| {
                        let resolved = resolution.pool(scope.pool.as_deref());

                        // Roster teams the calendar never mentions still get a row
                        // under the pool stored on the team.
                        let unscheduled = roster
                            .with_pool(scope.pool.as_deref())
                            .into_iter()
                            .filter(|team| !resolution.is_member_anywhere(team));

                        let members = resolved
                            .map(|p| p.members.clone())
                            .unwrap_or_default()
                            .into_iter()
                            .chain(unscheduled)
                            .unique_by(|t| t.id)
                            .collect();

                        ScopeInput {
                            members,
                            matches: resolved.map(|p| p.matches.clone()).unwrap_or_default(),
                            scope,
                        }
                    })
                    .collect::<Vec<_>>();

                let ignored = Self::ignored_matches(store, &inputs);

                let diagnostics = resolution
                    .diagnostics
                    .into_iter()
                    .filter(|d| pool.is_none() || d.pool.as_deref() == pool)
                    .chain(ignored)
                    .collect();

                (StandingsSource::Calendar, inputs, diagnostics)
            }
            None => {
                let mut diagnostics = Vec::new();

                let inputs = scopes
                    .into_iter()
                    .map(|scope| Self::from_matches(store, &roster, scope, &mut diagnostics))
                    .collect();

                (StandingsSource::Matches, inputs, diagnostics)
            }
        };

        Ok(CategoryInput {
            category,
            pool: pool.map(String::from),
            source,
            scopes,
            diagnostics,
        })
    }

    /// Completed canonical matches of a calendar-driven category. They do
    /// not count, so each one is reported.
    fn ignored_matches<S: LeagueSource + ?Sized>(store: &S, inputs: &[ScopeInput]) -> Vec<Diagnostic> {
        inputs
            .iter()
            .flat_map(|input| {
                store
                    .matches(&input.scope.category, input.scope.pool.as_deref())
                    .into_iter()
                    .filter(|m| m.is_completed())
                    .map(move |m| {
                        let diagnostic = Diagnostic::new(
                            DiagnosticKind::IgnoredMatch,
                            format!(
                                "teams {} and {}: results of '{}' come from its calendar",
                                m.home_team_id, m.away_team_id, input.scope.category
                            ),
                        )
                        .in_pool(m.pool.as_deref())
                        .for_match(m.id);
                        warn!("standings {}: {}", input.scope.category, diagnostic);
                        diagnostic
                    })
            })
            .collect()
    }

    fn from_matches<S: LeagueSource + ?Sized>(
        store: &S,
        roster: &TeamCollection,
        scope: StandingsScope,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ScopeInput {
        let mut members = roster.with_pool(scope.pool.as_deref());
        let mut matches = Vec::new();

        for m in store.matches(&scope.category, scope.pool.as_deref()) {
            if !m.is_completed() {
                continue;
            }

            let report = |kind: DiagnosticKind, message: String| {
                let diagnostic = Diagnostic::new(kind, message)
                    .in_pool(scope.pool.as_deref())
                    .for_match(m.id);
                warn!("standings {}: {}", scope.category, diagnostic);
                diagnostic
            };

            let Some((home_score, away_score)) = m.final_score() else {
                diagnostics.push(report(
                    DiagnosticKind::MissingScore,
                    "completed without both scores".to_string(),
                ));
                continue;
            };

            if home_score > MAX_SCORE || away_score > MAX_SCORE {
                diagnostics.push(report(
                    DiagnosticKind::ImplausibleScore,
                    format!("score {} - {} is above the maximum of {}", home_score, away_score, MAX_SCORE),
                ));
                continue;
            }

            if m.home_team_id == m.away_team_id {
                diagnostics.push(report(
                    DiagnosticKind::InvalidMatch,
                    format!("team {} is listed on both sides", m.home_team_id),
                ));
                continue;
            }

            let (Some(home), Some(away)) = (roster.by_id(m.home_team_id), roster.by_id(m.away_team_id)) else {
                diagnostics.push(report(
                    DiagnosticKind::UnknownTeam,
                    format!(
                        "teams {} and {} are not both in category '{}'",
                        m.home_team_id, m.away_team_id, scope.category
                    ),
                ));
                continue;
            };

            members.push(home.to_ref());
            members.push(away.to_ref());

            matches.push(ResolvedMatch {
                match_id: Some(m.id),
                home: home.to_ref(),
                away: away.to_ref(),
                home_score,
                away_score,
                forfeit: m.forfeit,
                date: Some(m.date),
                time: m.time.clone(),
            });
        }

        ScopeInput {
            members: members.into_iter().unique_by(|t| t.id).collect(),
            matches,
            scope,
        }
    }
}
