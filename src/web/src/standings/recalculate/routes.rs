use crate::LeagueAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/api/standings/recalculate", post(super::recalculate_all_action))
        .route("/api/standings/{category}/recalculate", post(super::recalculate_action))
}
