//! Challenge Error Types
//!
//! Challenge-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::entities::ChallengeRejection;

/// Challenge-specific result type alias
pub type ChallengeResult<T> = Result<T, ChallengeError>;

#[derive(Debug, Error)]
pub enum ChallengeError {
    /// Unknown, already consumed, or expired. Not retryable with the same value.
    #[error("Invalid challenge ({0})")]
    InvalidChallenge(ChallengeRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChallengeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChallengeError::InvalidChallenge(_) => StatusCode::GONE,
            ChallengeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ChallengeError::InvalidChallenge(_) => ErrorKind::Gone,
            ChallengeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            ChallengeError::Internal(msg) => {
                tracing::error!(message = %msg, "Challenge internal error");
            }
            ChallengeError::InvalidChallenge(reason) => {
                tracing::warn!(reason = %reason, "Challenge rejected");
            }
        }
    }
}

impl From<ChallengeError> for AppError {
    fn from(err: ChallengeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for ChallengeError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Return empty body for security (don't leak details)
        (status, ()).into_response()
    }
}
