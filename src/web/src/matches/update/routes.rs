use crate::LeagueAppData;
use axum::Router;
use axum::routing::put;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/matches/{id}", put(super::match_update_action))
}
