//! Error handling for the backend API

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::extract::ExtractError;
use crate::services::llm::LlmError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Model error: {0}")]
    Llm(#[from] LlmError),

    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Extraction(ExtractError::UnsupportedFileType(_)) => {
                (StatusCode::BAD_REQUEST, "unsupported_file_type")
            }
            ApiError::Extraction(_) => (StatusCode::UNPROCESSABLE_ENTITY, "extraction_error"),
            ApiError::Llm(_) => (StatusCode::BAD_GATEWAY, "model_error"),
            ApiError::Multipart(e) => (e.status(), "upload_error"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
