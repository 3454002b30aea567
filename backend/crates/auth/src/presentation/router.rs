//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use challenge::ChallengeStore;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::service::{CredentialIssuer, SignatureVerifier};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{CredentialMiddlewareState, require_credential};

/// Router exposing `POST /login`, meant to be nested under `/auth` next to
/// `challenge::challenge_router` sharing the same store.
pub fn auth_router<S, C, I>(
    verifier: Arc<S>,
    challenges: Arc<C>,
    issuer: Arc<I>,
    config: Arc<AuthConfig>,
) -> Router
where
    S: SignatureVerifier + Send + Sync + 'static,
    C: ChallengeStore + Send + Sync + 'static,
    I: CredentialIssuer + Send + Sync + 'static,
{
    let state = AuthAppState {
        verifier,
        challenges,
        issuer,
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<S, C, I>))
        .with_state(state)
}

/// Router exposing `GET /me` behind the bearer credential guard, meant to be
/// nested under `/identity`.
pub fn identity_router<I>(issuer: Arc<I>) -> Router
where
    I: CredentialIssuer + Send + Sync + 'static,
{
    let state = CredentialMiddlewareState { issuer };

    Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(
            state,
            require_credential::<I>,
        ))
}
