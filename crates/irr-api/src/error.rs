//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use irr_analytics::AnalyticsError;

use crate::dto::IrrResponse;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request code was not accepted.
    #[error("Your request is rejected.")]
    Rejected,

    /// Bad request (invalid input).
    #[error("{0}")]
    BadRequest(String),

    /// Validation error.
    #[error("{0}")]
    Validation(String),

    /// Calculation failed.
    #[error("{0}")]
    CalculationFailed(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::CalculationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }

        (status, Json(IrrResponse::failure(self.to_string()))).into_response()
    }
}

// Conversions from domain errors
impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        if err.is_input_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::CalculationFailed(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
