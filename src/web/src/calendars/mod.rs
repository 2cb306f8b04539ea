pub mod get;
pub mod put;

use crate::LeagueAppData;
use axum::Router;

pub fn calendar_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(get::routes::routes())
        .merge(put::routes::routes())
}
