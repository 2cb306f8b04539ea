use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use league_core::StandingsError;
use log::error;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => {
                error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StandingsError> for ApiError {
    fn from(err: StandingsError) -> Self {
        match err {
            StandingsError::CategoryNotFound(_) | StandingsError::MatchNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            StandingsError::PoolRequired { .. }
            | StandingsError::UndeclaredPool { .. }
            | StandingsError::PoolNotAllowed { .. }
            | StandingsError::InvalidMatch(_) => ApiError::BadRequest(err.to_string()),
            StandingsError::Store(_) => ApiError::InternalError(err.to_string()),
        }
    }
}
