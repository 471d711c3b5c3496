//! Core Error Types
//!
//! The typed failures every component returns, and their single translation
//! into an HTTP response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core module result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Body message for failures the caller should not see the detail of
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Submitted data broke one or more field rules
    #[error("{message}")]
    Validation { message: String, errors: Vec<String> },

    /// Referenced record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Missing or incorrect credential on a gated method
    #[error("{0}")]
    Unauthorized(String),

    /// Any other client-facing failure with an explicit status
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Anything else; the detail is for operators only
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl CoreError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create an error with an explicit status
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create an unexpected error
    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected(detail.into())
    }

    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Status { .. } => "REQUEST_ERROR",
            Self::Unexpected(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Status { status, .. } => *status,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl From<CoreError> for ErrorResponse {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message, errors } => Self {
                message,
                errors: Some(errors),
            },
            CoreError::NotFound(message)
            | CoreError::Unauthorized(message)
            | CoreError::Status { message, .. } => Self {
                message,
                errors: None,
            },
            CoreError::Unexpected(_) => Self {
                message: UNEXPECTED_MESSAGE.to_string(),
                errors: None,
            },
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let CoreError::Unexpected(detail) = &self {
            tracing::error!(detail = %detail, "request failed unexpectedly");
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
