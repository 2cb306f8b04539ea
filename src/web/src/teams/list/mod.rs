pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Query, State};
use itertools::Itertools;
use league_core::{LeagueSource, Team};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TeamListRequest {
    pub category: Option<String>,
}

/// Teams with their denormalised standings record.
pub async fn team_list_action(
    State(state): State<LeagueAppData>,
    Query(request): Query<TeamListRequest>,
) -> ApiResult<Json<Vec<Team>>> {
    let db = state.database.read().await;

    let teams = match &request.category {
        Some(category) => {
            if db.category(category).is_none() {
                return Err(ApiError::NotFound(format!("category '{}' not found", category)));
            }
            db.teams(category)
        }
        None => db.all_teams().to_vec(),
    };

    Ok(Json(
        teams
            .into_iter()
            .sorted_by(|a, b| (&a.category, &a.pool, &a.name).cmp(&(&b.category, &b.pool, &b.name)))
            .collect(),
    ))
}
