//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fittrack_shared::errors::FitTrackError;
use fittrack_shared::types::{ErrorDetail, ErrorResponse};
use thiserror::Error;
use tracing::{error, warn};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-positive or non-finite biometrics reaching the calculator.
    /// Handlers validate ranges first, so out-of-range form values,
    /// zero included, surface as `Validation`.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Timeframe must be at least one week")]
    ZeroTimeframe,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<FitTrackError> for ApiError {
    fn from(err: FitTrackError) -> Self {
        match err {
            FitTrackError::InvalidInput(msg) => ApiError::InvalidInput(msg),
            FitTrackError::ZeroTimeframe => ApiError::ZeroTimeframe,
            FitTrackError::ExternalServiceFailure(msg) => {
                ApiError::Internal(anyhow::anyhow!("External service failure: {msg}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone()),
            ApiError::ZeroTimeframe => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ZERO_TIMEFRAME",
                self.to_string(),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        if status.is_client_error() {
            warn!(code, %message, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
