pub mod routes;

use crate::standings::PoolQuery;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, Query, State};
use league_core::{Recalculation, StandingsEngine};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecalculationDto {
    pub category: String,
    pub recalculation: Option<Recalculation>,
    pub error: Option<String>,
}

pub async fn recalculate_action(
    State(state): State<LeagueAppData>,
    Path(category): Path<String>,
    Query(query): Query<PoolQuery>,
) -> ApiResult<Json<Recalculation>> {
    let recalculation = state
        .write(move |db| StandingsEngine::recalculate(db, &category, query.pool.as_deref()).map_err(ApiError::from))
        .await?;

    Ok(Json(recalculation))
}

pub async fn recalculate_all_action(State(state): State<LeagueAppData>) -> ApiResult<Json<Vec<CategoryRecalculationDto>>> {
    let results = state
        .write(|db| {
            let results = StandingsEngine::recalculate_all(db)
                .into_iter()
                .map(|(category, result)| match result {
                    Ok(recalculation) => CategoryRecalculationDto {
                        category,
                        recalculation: Some(recalculation),
                        error: None,
                    },
                    Err(e) => CategoryRecalculationDto {
                        category,
                        recalculation: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();

            Ok(results)
        })
        .await?;

    Ok(Json(results))
}
