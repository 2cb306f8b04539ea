pub mod get;
pub mod recalculate;

use crate::LeagueAppData;
use axum::Router;
use serde::Deserialize;

pub fn standings_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(get::routes::routes())
        .merge(recalculate::routes::routes())
}

#[derive(Deserialize)]
pub struct PoolQuery {
    pub pool: Option<String>,
}
