use crate::LeagueAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/matches", post(super::match_create_action))
}
