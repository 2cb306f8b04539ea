use crate::LeagueAppData;
use axum::Router;
use axum::routing::put;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/calendars/{category}", put(super::calendar_put_action))
}
