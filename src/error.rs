use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Rating service unavailable")]
    Unavailable,

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Violations of the dataset invariants, reported when a catalog is built.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("course id must be positive")]
    ZeroId,

    #[error("duplicate course id {0}")]
    DuplicateId(u32),

    #[error("course {0} has a negative or non-finite price")]
    InvalidPrice(u32),

    #[error("course {0} rating must be within 0..=5")]
    RatingOutOfRange(u32),

    #[error("free course {0} has no drive url")]
    FreeWithoutUrl(u32),

    #[error("paid course {0} must not embed a content url")]
    PaidWithUrl(u32),

    #[error("course {id} lesson '{lesson}' has malformed duration '{duration}'")]
    MalformedDuration {
        id: u32,
        lesson: String,
        duration: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => {
                error!("rating service error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Rating service error".to_string())
            }
            AppError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Rating system not available".to_string(),
            ),
            other => {
                error!("internal error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
