pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use league_core::LeagueSource;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub has_pools: bool,
    pub pools: Vec<String>,
    pub teams: usize,
    pub has_calendar: bool,
}

pub async fn category_list_action(State(state): State<LeagueAppData>) -> ApiResult<Json<Vec<CategoryDto>>> {
    let db = state.database.read().await;

    let categories = db
        .categories()
        .into_iter()
        .map(|category| CategoryDto {
            teams: db.teams(&category.name).len(),
            has_calendar: db.calendar(&category.name).is_some(),
            name: category.name,
            has_pools: category.has_pools,
            pools: category.pools,
        })
        .collect();

    Ok(Json(categories))
}
