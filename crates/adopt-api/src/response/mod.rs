//! Response types and error handling for API endpoints
//!
//! Service outcomes become JSON responses here: the payload of a `Failure` or a
//! `Success` is written as-is, while infrastructure errors become a generic
//! error body.

use adopt_core::Outcome;
use adopt_service::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message sent in place of any server-side error detail
const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid authorization header format")]
    InvalidAuthFormat,
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::MissingAuth | Self::InvalidAuthFormat => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::MissingAuth => "MISSING_AUTHORIZATION",
            Self::InvalidAuthFormat => "INVALID_AUTHORIZATION_FORMAT",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server errors are logged in full and reported generically
        let (code, message) = if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
            ("INTERNAL_ERROR", INTERNAL_MESSAGE.to_string())
        } else {
            (self.error_code(), self.to_string())
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// A service outcome rendered with one status per variant
///
/// The body is the populated payload alone: `{"message": ...}` for a failure,
/// the success value otherwise.
#[must_use]
pub struct OutcomeResponse<S> {
    outcome: Outcome<S>,
    success: StatusCode,
    failure: StatusCode,
}

impl<S> OutcomeResponse<S> {
    /// `200 OK` on success, `400 Bad Request` on failure
    pub fn ok(outcome: Outcome<S>) -> Self {
        Self {
            outcome,
            success: StatusCode::OK,
            failure: StatusCode::BAD_REQUEST,
        }
    }

    /// `201 Created` on success, `400 Bad Request` on failure
    pub fn created(outcome: Outcome<S>) -> Self {
        Self {
            success: StatusCode::CREATED,
            ..Self::ok(outcome)
        }
    }

    /// Override the failure status
    pub fn failure_status(mut self, status: StatusCode) -> Self {
        self.failure = status;
        self
    }
}

impl<S: Serialize> IntoResponse for OutcomeResponse<S> {
    fn into_response(self) -> Response {
        let status = if self.outcome.is_failure() {
            self.failure
        } else {
            self.success
        };
        (status, Json(self.outcome)).into_response()
    }
}
