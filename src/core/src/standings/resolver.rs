use crate::calendar::{Calendar, CalendarMatch, CalendarScore};
use crate::r#match::MatchStatus;
use crate::standings::{Diagnostic, DiagnosticKind, ResolvedMatch};
use crate::team::{TeamCollection, TeamRef};
use itertools::Itertools;
use log::warn;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    Unresolved { name: String, category: String },
    Ambiguous { name: String, category: String },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::Unresolved { name, category } => {
                write!(f, "no team named '{}' in category '{}'", name, category)
            }
            ResolutionError::Ambiguous { name, category } => {
                write!(f, "several teams named '{}' in category '{}'", name, category)
            }
        }
    }
}

impl std::error::Error for ResolutionError {}

impl From<&ResolutionError> for DiagnosticKind {
    fn from(err: &ResolutionError) -> Self {
        match err {
            ResolutionError::Unresolved { .. } => DiagnosticKind::UnresolvedTeam,
            ResolutionError::Ambiguous { .. } => DiagnosticKind::AmbiguousTeam,
        }
    }
}

/// Teams and playable games of one calendar pool.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPool {
    pub pool: Option<String>,
    /// Every team the pool names, played or not.
    pub members: Vec<TeamRef>,
    pub matches: Vec<ResolvedMatch>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub pools: Vec<ResolvedPool>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn pool(&self, name: Option<&str>) -> Option<&ResolvedPool> {
        self.pools.iter().find(|p| p.pool.as_deref() == name)
    }

    pub fn is_member_anywhere(&self, team: &TeamRef) -> bool {
        self.pools.iter().any(|p| p.members.iter().any(|m| m.id == team.id))
    }
}

pub struct CalendarResolver;

impl CalendarResolver {
    /// Maps calendar team names onto the category roster. Pool membership
    /// comes from where the game sits in the calendar, not from the team.
    /// A game with an unresolved side is dropped and reported.
    pub fn resolve(calendar: &Calendar, roster: &TeamCollection) -> Resolution {
        let mut resolution = Resolution::default();

        for pool in &calendar.pools {
            let pool_name = pool.name.as_deref();

            let mut members = Vec::new();
            let mut matches = Vec::new();

            for matchday in &pool.matchdays {
                for calendar_match in &matchday.matches {
                    let home = roster.find_by_name(&calendar_match.home_team_name);
                    let away = roster.find_by_name(&calendar_match.away_team_name);

                    let (home, away) = match (home, away) {
                        (Ok(home), Ok(away)) => (home, away),
                        (home, away) => {
                            for side in [home, away] {
                                match side {
                                    Ok(team) => members.push(team),
                                    Err(err) => resolution.diagnostics.push(
                                        Self::diagnostic((&err).into(), err.to_string(), pool_name, matchday.number),
                                    ),
                                }
                            }
                            continue;
                        }
                    };

                    members.push(home.clone());
                    members.push(away.clone());

                    if let Some(resolved) = Self::playable(
                        calendar_match,
                        home,
                        away,
                        matchday.date,
                        pool_name,
                        matchday.number,
                        &mut resolution.diagnostics,
                    ) {
                        matches.push(resolved);
                    }
                }
            }

            resolution.pools.push(ResolvedPool {
                pool: pool.name.clone(),
                members: members.into_iter().unique_by(|t| t.id).collect(),
                matches,
            });
        }

        for diagnostic in &resolution.diagnostics {
            warn!("calendar {}: {}", calendar.category, diagnostic);
        }

        resolution
    }

    fn playable(
        calendar_match: &CalendarMatch,
        home: TeamRef,
        away: TeamRef,
        matchday_date: Option<chrono::NaiveDate>,
        pool: Option<&str>,
        matchday: u32,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<ResolvedMatch> {
        if calendar_match.effective_status() != MatchStatus::Completed {
            return None;
        }

        if home.id == away.id {
            diagnostics.push(Self::diagnostic(
                DiagnosticKind::InvalidMatch,
                format!("'{}' is listed on both sides", home.name),
                pool,
                matchday,
            ));
            return None;
        }

        let (home_score, away_score) = match (&calendar_match.home_score, &calendar_match.away_score) {
            (Some(h), Some(a)) => (h, a),
            _ => {
                diagnostics.push(Self::diagnostic(
                    DiagnosticKind::MissingScore,
                    format!("{} vs {} is completed without both scores", home.name, away.name),
                    pool,
                    matchday,
                ));
                return None;
            }
        };

        let (Some(home_score), Some(away_score)) = (home_score.value(), away_score.value()) else {
            let (kind, problem) = if home_score.is_out_of_range() || away_score.is_out_of_range() {
                (DiagnosticKind::ImplausibleScore, "an implausible")
            } else {
                (DiagnosticKind::NonNumericScore, "a non-numeric")
            };

            diagnostics.push(Self::diagnostic(
                kind,
                format!(
                    "{} vs {} has {} score ({} - {})",
                    home.name,
                    away.name,
                    problem,
                    Self::display_score(home_score),
                    Self::display_score(away_score)
                ),
                pool,
                matchday,
            ));
            return None;
        };

        Some(ResolvedMatch {
            match_id: None,
            home,
            away,
            home_score,
            away_score,
            forfeit: calendar_match.forfeit,
            date: calendar_match.date.or(matchday_date),
            time: calendar_match.time.clone(),
        })
    }

    fn display_score(score: &CalendarScore) -> String {
        match score {
            CalendarScore::Number(n) => n.to_string(),
            CalendarScore::Text(text) => format!("'{}'", text),
        }
    }

    fn diagnostic(kind: DiagnosticKind, message: String, pool: Option<&str>, matchday: u32) -> Diagnostic {
        Diagnostic::new(kind, message).in_pool(pool).on_matchday(matchday)
    }
}
