pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use league_core::{Calendar, LeagueSource};

pub async fn calendar_get_action(
    State(state): State<LeagueAppData>,
    Path(category): Path<String>,
) -> ApiResult<Json<Calendar>> {
    let db = state.database.read().await;

    if db.category(&category).is_none() {
        return Err(ApiError::NotFound(format!("category '{}' not found", category)));
    }

    let calendar = db
        .calendar(&category)
        .ok_or_else(|| ApiError::NotFound(format!("no calendar for category '{}'", category)))?;

    Ok(Json(calendar))
}
