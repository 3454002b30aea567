//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Login failures are indistinguishable on the wire: whatever step failed,
//! [`LoginFailure`] renders the same 401 body. The distinction survives in logs.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use challenge::{ChallengeError, ChallengeRejection};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::dto::{CredentialFailureResponse, LoginFailureResponse};

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed input or a signature that does not verify
    #[error("Invalid cryptographic signature")]
    InvalidSignature,

    /// The signed message is not a live challenge
    #[error("Invalid challenge ({0})")]
    InvalidChallenge(ChallengeRejection),

    /// Bearer token is forged, malformed or expired
    #[error("Invalid credential")]
    InvalidCredential,

    #[error("Login timed out")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidSignature
            | AuthError::InvalidChallenge(_)
            | AuthError::InvalidCredential => StatusCode::UNAUTHORIZED,
            AuthError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidSignature
            | AuthError::InvalidChallenge(_)
            | AuthError::InvalidCredential => ErrorKind::Unauthorized,
            AuthError::Timeout => ErrorKind::RequestTimeout,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidChallenge(reason) => {
                tracing::warn!(reason = %reason, "Login rejected: invalid challenge");
            }
            AuthError::InvalidSignature => {
                tracing::warn!("Login rejected: invalid signature");
            }
            AuthError::Timeout => {
                tracing::warn!("Login timed out");
            }
            AuthError::InvalidCredential => {
                tracing::debug!("Bearer credential rejected");
            }
        }
    }
}

impl From<ChallengeError> for AuthError {
    fn from(err: ChallengeError) -> Self {
        match err {
            ChallengeError::InvalidChallenge(reason) => AuthError::InvalidChallenge(reason),
            ChallengeError::Internal(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            AuthError::InvalidSignature | AuthError::InvalidChallenge(_) => {
                LoginFailure::body().into_response()
            }
            AuthError::InvalidCredential => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(CredentialFailureResponse::default()),
            )
                .into_response(),
            AuthError::Timeout => AppError::new(ErrorKind::RequestTimeout, "Login timed out")
                .with_action("Request a new challenge and try again")
                .into_response(),
            AuthError::Internal(_) => AppError::internal("Internal server error").into_response(),
        }
    }
}

/// A failed login as the client sees it.
///
/// Every cause, timeouts and issuer faults included, renders the uniform
/// 401 body. The cause is only logged.
#[derive(Debug)]
pub struct LoginFailure(pub AuthError);

impl LoginFailure {
    fn body() -> (StatusCode, Json<LoginFailureResponse>) {
        (StatusCode::UNAUTHORIZED, Json(LoginFailureResponse::default()))
    }
}

impl From<AuthError> for LoginFailure {
    fn from(err: AuthError) -> Self {
        LoginFailure(err)
    }
}

impl IntoResponse for LoginFailure {
    fn into_response(self) -> Response {
        self.0.log();
        Self::body().into_response()
    }
}
