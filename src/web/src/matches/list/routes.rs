use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/matches", get(super::match_list_action))
}
