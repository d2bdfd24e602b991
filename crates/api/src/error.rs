//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. All failures render as
//! `{"error": "<message>"}` with status 400, except [`AppError::NotFound`]
//! which is 404.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::middleware::current_request_id;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository operation failed (constraint violation, missing row, driver error).
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Resource not found on a read.
    #[error("{0}")]
    NotFound(String),

    /// Request could not be decoded (body, path parameter, content type).
    #[error("{0}")]
    BadRequest(String),
}

/// JSON error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Repository(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = current_request_id().unwrap_or_default();

        // Driver-level failures are ours, not the client's
        if matches!(self, Self::Repository(RepositoryError::Database(_))) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                request_id = %request_id,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, request_id = %request_id, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
