pub mod list;

use crate::LeagueAppData;
use axum::Router;

pub fn category_routes() -> Router<LeagueAppData> {
    Router::new().merge(list::routes::routes())
}
