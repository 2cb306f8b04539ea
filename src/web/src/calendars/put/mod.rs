pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use league_core::{Calendar, CalendarPool, LeagueEvent, Recalculation, StandingsEngine};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPutRequest {
    #[serde(default)]
    pub pools: Vec<CalendarPool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPutResponse {
    pub created: bool,
    pub matches: usize,
    pub standings: Option<Recalculation>,
}

/// Creates or replaces the whole calendar of a category, then rebuilds
/// the category standings from it.
pub async fn calendar_put_action(
    State(state): State<LeagueAppData>,
    Path(category): Path<String>,
    Json(request): Json<CalendarPutRequest>,
) -> ApiResult<(StatusCode, Json<CalendarPutResponse>)> {
    let response = state
        .write(move |db| {
            let calendar = Calendar::new(&category, request.pools);
            let matches = calendar.match_count();

            let created = db.put_calendar(calendar)?;

            info!("calendar {} for {}: {} matches", if created { "created" } else { "replaced" }, category, matches);

            let standings = StandingsEngine::handle(db, &LeagueEvent::CalendarWritten(category));

            Ok(CalendarPutResponse {
                created,
                matches,
                standings,
            })
        })
        .await?;

    let status = if response.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)))
}
