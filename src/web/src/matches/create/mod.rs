pub mod routes;

use crate::matches::{MatchRequest, MatchWriteResponse, refresh_standings};
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use log::info;

pub async fn match_create_action(
    State(state): State<LeagueAppData>,
    Json(request): Json<MatchRequest>,
) -> ApiResult<(StatusCode, Json<MatchWriteResponse>)> {
    let response = state
        .write(move |db| {
            let game = db.create_match(request.into_match(0))?;

            info!("match {} created: {} vs {}", game.id, game.home_team_id, game.away_team_id);

            let standings = refresh_standings(db, &game);

            Ok(MatchWriteResponse { game, standings })
        })
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[cfg(test)]
mod tests {
    use crate::matches::tests::completed_match;
    use crate::testing::{app_data, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_create_completed_match_refreshes_standings() {
        let data = app_data();

        let (status, json) = send(&data, Method::POST, "/api/matches", Some(completed_match(6, 5, (90, 60)))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["match"]["id"], 9);

        let entries = json["standings"]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 6);

        let strasbourg = entries.iter().find(|e| e["teamId"] == 6).unwrap();
        assert_eq!(strasbourg["won"], 1);
        assert_eq!(strasbourg["last5"][0]["result"], "W");
    }

    #[tokio::test]
    async fn test_create_upcoming_match_leaves_standings() {
        let data = app_data();

        let body = json!({
            "date": "2024-11-02",
            "homeTeamId": 3,
            "awayTeamId": 6,
            "category": "L1 MESSIEUR"
        });

        let (status, json) = send(&data, Method::POST, "/api/matches", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["match"]["status"], "upcoming");
        assert!(json["standings"].is_null());
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_scores() {
        let data = app_data();

        for _ in 0..2 {
            let (status, json) =
                send(&data, Method::POST, "/api/matches", Some(completed_match(1, 2, (4_000_000_000, 70)))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(json["error"].as_str().unwrap().contains("maximum"));
        }

        let (_, matches) = send(&data, Method::GET, "/api/matches?category=L1%20MESSIEUR", None).await;
        assert_eq!(matches.as_array().unwrap().len(), 8);

        let (status, _) = send(&data, Method::POST, "/api/standings/L1%20MESSIEUR/recalculate", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_match_in_calendar_category_is_reported() {
        let data = app_data();

        let mut body = completed_match(11, 12, (70, 30));
        body["category"] = json!("U15 GARCONS");
        body["pool"] = json!("A");

        let (status, json) = send(&data, Method::POST, "/api/matches", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let standings = &json["standings"];
        assert_eq!(standings["source"], "calendar");

        let diagnostics = standings["diagnostics"].as_array().unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0]["kind"], "ignoredMatch");
        assert_eq!(diagnostics[0]["matchId"], json["match"]["id"]);

        let lions = standings["entries"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["teamId"] == 11)
            .unwrap()
            .clone();
        assert_eq!(lions["played"], 1);
    }

    #[tokio::test]
    async fn test_create_invalid_match() {
        let data = app_data();

        let (status, json) = send(&data, Method::POST, "/api/matches", Some(completed_match(2, 2, (50, 40)))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());

        let mut wrong_category = completed_match(1, 11, (50, 40));
        wrong_category["pool"] = json!(null);
        let (status, _) = send(&data, Method::POST, "/api/matches", Some(wrong_category)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
