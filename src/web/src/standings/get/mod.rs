pub mod routes;

use crate::standings::PoolQuery;
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, Query, State};
use league_core::{StandingsEngine, StandingsEntry};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub category: String,
    pub pool: Option<String>,
    pub entries: Vec<StandingsEntry>,
}

pub async fn standings_get_action(
    State(state): State<LeagueAppData>,
    Path(category): Path<String>,
    Query(query): Query<PoolQuery>,
) -> ApiResult<Json<StandingsResponse>> {
    let db = state.database.read().await;

    let entries = StandingsEngine::standings(&*db, &category, query.pool.as_deref())?;

    Ok(Json(StandingsResponse {
        category,
        pool: query.pool,
        entries,
    }))
}
