//! HTTP error mapping.

use crate::session::SessionError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors surfaced by the API, each mapped to a status code.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ApiError {
    /// 404: unknown game.
    #[display("Game not found")]
    NotFound,
    /// 422: the request was understood but can't be honored.
    #[display("{_0}")]
    Unprocessable(String),
    /// 400: the request itself is malformed.
    #[display("{_0}")]
    BadRequest(String),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::GameNotFound => ApiError::NotFound,
            SessionError::GameFull
            | SessionError::AlreadyConfirmed
            | SessionError::PlayerNotFound => ApiError::Unprocessable(err.to_string()),
            SessionError::StoneOutOfRange | SessionError::BanZoneDoesNotFit => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
