use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Boundary outcome of a failed request. `NotFound` and `Internal` render
/// with an empty body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                let body = serde_json::to_string(&ErrorBody { error: msg })
                    .unwrap_or_else(|_| "{\"error\":\"internal serialization\"}".into());
                (
                    StatusCode::BAD_REQUEST,
                    [("content-type", "application/json")],
                    body,
                )
                    .into_response()
            }
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
