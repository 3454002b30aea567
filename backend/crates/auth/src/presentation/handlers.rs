//! HTTP Handlers

use axum::extract::State;
use axum::{Extension, Json};
use challenge::ChallengeStore;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase};
use crate::domain::service::{CredentialIssuer, SignatureVerifier};
use crate::error::LoginFailure;
use crate::presentation::dto::{LoginRequest, LoginResponse, MeResponse};
use crate::presentation::middleware::AuthenticatedWallet;

/// Shared state for auth handlers
pub struct AuthAppState<S, C, I>
where
    S: SignatureVerifier + Send + Sync + 'static,
    C: ChallengeStore + Send + Sync + 'static,
    I: CredentialIssuer + Send + Sync + 'static,
{
    pub verifier: Arc<S>,
    pub challenges: Arc<C>,
    pub issuer: Arc<I>,
    pub config: Arc<AuthConfig>,
}

impl<S, C, I> Clone for AuthAppState<S, C, I>
where
    S: SignatureVerifier + Send + Sync + 'static,
    C: ChallengeStore + Send + Sync + 'static,
    I: CredentialIssuer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            challenges: self.challenges.clone(),
            issuer: self.issuer.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<S, C, I>(
    State(state): State<AuthAppState<S, C, I>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, LoginFailure>
where
    S: SignatureVerifier + Send + Sync + 'static,
    C: ChallengeStore + Send + Sync + 'static,
    I: CredentialIssuer + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.verifier.clone(),
        state.challenges.clone(),
        state.issuer.clone(),
    );

    let input = LoginInput {
        message: req.message,
        signature: req.signature.into_encoded(),
        public_key: req.public_key,
    };

    let credential = use_case
        .execute_within(input, state.config.login_timeout)
        .await?;

    Ok(Json(LoginResponse::bearer(
        credential.token.clone(),
        credential.expires_at(),
    )))
}

// ============================================================================
// Identity
// ============================================================================

/// GET /identity/me
pub async fn me(Extension(wallet): Extension<AuthenticatedWallet>) -> Json<MeResponse> {
    Json(MeResponse {
        wallet: wallet.0.to_string(),
    })
}
