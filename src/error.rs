//! Common error types for the poster generation service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Generation API key is not configured")]
    MissingApiKey,

    #[error("Generation API error: {0}")]
    Api(String),

    #[error("Generation API returned no candidates")]
    NoCandidates,

    #[error("Generation API returned no image data")]
    NoImageData,

    #[error("All selected styles failed to generate")]
    AllStylesFailed,

    #[error("A generation batch is already in progress")]
    BatchInProgress,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response format returned by the HTTP API
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub r#type: String,
    pub code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server_error", None),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server_error", None),
            AppError::Json(_) => (StatusCode::BAD_REQUEST, "invalid_request_error", Some("invalid_json")),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, "upstream_error", None),
            AppError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, "server_error", Some("missing_api_key")),
            AppError::Api(_) => (StatusCode::BAD_GATEWAY, "upstream_error", None),
            AppError::NoCandidates => (StatusCode::BAD_GATEWAY, "upstream_error", Some("no_candidates")),
            AppError::NoImageData => (StatusCode::BAD_GATEWAY, "upstream_error", Some("no_image_data")),
            AppError::AllStylesFailed => (StatusCode::BAD_GATEWAY, "generation_error", Some("all_styles_failed")),
            AppError::BatchInProgress => (StatusCode::CONFLICT, "conflict_error", Some("batch_in_progress")),
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request_error", None),
            AppError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout_error", None),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server_error", None),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                message: self.to_string(),
                r#type: error_type.to_string(),
                code: code.map(|c| c.to_string()),
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
