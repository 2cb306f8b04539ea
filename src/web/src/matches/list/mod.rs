pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Query, State};
use itertools::Itertools;
use league_core::{LeagueSource, Match};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MatchListRequest {
    pub category: Option<String>,
    pub pool: Option<String>,
}

pub async fn match_list_action(
    State(state): State<LeagueAppData>,
    Query(request): Query<MatchListRequest>,
) -> ApiResult<Json<Vec<Match>>> {
    let db = state.database.read().await;

    let matches = match &request.category {
        Some(name) => {
            let category = db
                .category(name)
                .ok_or_else(|| ApiError::NotFound(format!("category '{}' not found", name)))?;

            if request.pool.is_some() {
                category.validate_pool(request.pool.as_deref())?;
            }

            db.matches(name, request.pool.as_deref())
        }
        None => db.all_matches().to_vec(),
    };

    Ok(Json(
        matches
            .into_iter()
            .sorted_by(|a, b| (a.date, &a.time, a.id).cmp(&(b.date, &b.time, b.id)))
            .collect(),
    ))
}
