use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/categories", get(super::category_list_action))
}
