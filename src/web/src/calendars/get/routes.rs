use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/calendars/{category}", get(super::calendar_get_action))
}
