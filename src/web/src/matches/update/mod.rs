pub mod routes;

use crate::matches::{MatchRequest, MatchWriteResponse, refresh_standings};
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use league_core::MatchId;

pub async fn match_update_action(
    State(state): State<LeagueAppData>,
    Path(id): Path<MatchId>,
    Json(request): Json<MatchRequest>,
) -> ApiResult<Json<MatchWriteResponse>> {
    let response = state
        .write(move |db| {
            let game = db.update_match(request.into_match(id))?;
            let standings = refresh_standings(db, &game);

            Ok(MatchWriteResponse { game, standings })
        })
        .await?;

    Ok(Json(response))
}
