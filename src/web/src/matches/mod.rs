pub mod create;
pub mod list;
pub mod update;

use crate::LeagueAppData;
use axum::Router;
use chrono::NaiveDate;
use database::LeagueDatabase;
use league_core::{Forfeit, LeagueEvent, Match, MatchId, MatchStatus, Recalculation, StandingsEngine, TeamId};
use serde::{Deserialize, Serialize};

pub fn match_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(create::routes::routes())
        .merge(update::routes::routes())
}

/// Match body accepted by the create and update actions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
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
}

impl MatchRequest {
    pub fn into_match(self, id: MatchId) -> Match {
        Match {
            id,
            date: self.date,
            time: self.time,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            category: self.category,
            pool: self.pool,
            venue: self.venue,
            status: self.status,
            home_score: self.home_score,
            away_score: self.away_score,
            forfeit: self.forfeit,
            matchday: self.matchday,
            imported: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchWriteResponse {
    #[serde(rename = "match")]
    pub game: Match,
    /// Refreshed standings, when the write made the match count.
    pub standings: Option<Recalculation>,
}

fn refresh_standings(db: &mut LeagueDatabase, game: &Match) -> Option<Recalculation> {
    if !game.counts_for_standings() {
        return None;
    }

    StandingsEngine::handle(db, &LeagueEvent::MatchCompleted(game.id))
}
