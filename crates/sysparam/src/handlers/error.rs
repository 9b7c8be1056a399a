//! JSON error envelope for API handlers.
//!
//! Every failure renders as `{ "success": false, "message": ... }`, with an
//! `errors` map added for validation failures.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use sysparam_core::auth::AuthError;
use sysparam_core::parameter::{LifecycleError, ValidationErrors};
use sysparam_core::storage::{repository_error_to_status_code, RepositoryError};

pub const RECORD_NOT_FOUND: &str = "Record not found";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ValidationErrors>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure. `message` is the fixed text the caller sees.
    #[error("{message}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn record_not_found() -> Self {
        Self::NotFound(RECORD_NOT_FOUND.to_string())
    }

    /// Wraps an unexpected error behind a fixed public message.
    pub fn internal(message: &'static str, cause: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message,
            cause: cause.into(),
        }
    }

    /// Maps a repository failure. Missing records become `Record not found`;
    /// every other failure is a 500 behind the fixed `message`.
    pub fn from_repository(error: RepositoryError, message: &'static str) -> Self {
        match repository_error_to_status_code(&error) {
            404 => Self::record_not_found(),
            _ => Self::internal(message, error),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Unauthorized(error.to_string())
    }
}

impl From<LifecycleError> for ApiError {
    fn from(error: LifecycleError) -> Self {
        match error {
            LifecycleError::InvalidTransition { .. } => ApiError::Conflict(error.to_string()),
            LifecycleError::MissingRejectionReason => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("Invalid path: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Internal { message, cause } => {
                tracing::error!(status = %status, message = %message, error = ?cause, "API error");
            }
            other => {
                tracing::warn!(status = %status, message = %other, "API error");
            }
        }

        let message = self.to_string();
        let errors = match &self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        };
        let body = ErrorBody {
            success: false,
            message: &message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}
