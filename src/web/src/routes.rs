use crate::LeagueAppData;
use crate::calendars::calendar_routes;
use crate::categories::category_routes;
use crate::matches::match_routes;
use crate::standings::standings_routes;
use crate::teams::team_routes;
use crate::ApiError;
use axum::Router;

async fn not_found_handler(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<LeagueAppData> {
        Router::<LeagueAppData>::new()
            .merge(category_routes())
            .merge(team_routes())
            .merge(match_routes())
            .merge(calendar_routes())
            .merge(standings_routes())
            .fallback(not_found_handler)
    }
}
