use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use screening_instruments::error::{Incomplete, InvalidSelection, ScoreError};

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Incomplete(Incomplete),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    answered: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<usize>,
}

impl ErrorBody {
    fn message(error: String) -> Self {
        Self {
            error,
            answered: None,
            expected: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::message(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
            ApiError::Incomplete(incomplete) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "please answer all questions before seeing results".to_string(),
                    answered: Some(incomplete.answered),
                    expected: Some(incomplete.expected),
                },
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("internal server error".to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    pub fn unknown_instrument(id: &str) -> Self {
        ApiError::NotFound(format!("instrument not found: {id}"))
    }
}

impl From<InvalidSelection> for ApiError {
    fn from(e: InvalidSelection) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ScoreError> for ApiError {
    fn from(e: ScoreError) -> Self {
        match e {
            ScoreError::Incomplete(incomplete) => ApiError::Incomplete(incomplete),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<screening_export::error::ExportError> for ApiError {
    fn from(e: screening_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
