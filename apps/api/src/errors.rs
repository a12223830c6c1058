use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::share::codec::{DecodingError, EncodingError, DECODE_FAILURE_MESSAGE};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Encoding(e) => {
                tracing::warn!("Encoding error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "ENCODE_ERROR",
                    e.to_string(),
                )
            }
            AppError::Decoding(e) => {
                tracing::warn!(kind = e.kind(), "Decoding error: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "DECODE_ERROR",
                    DECODE_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
