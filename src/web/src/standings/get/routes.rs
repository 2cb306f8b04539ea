use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/standings/{category}", get(super::standings_get_action))
}
