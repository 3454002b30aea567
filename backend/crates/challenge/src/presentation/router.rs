//! Challenge Router

use crate::domain::store::ChallengeStore;
use crate::presentation::handlers::{self, ChallengeAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Router exposing `GET /challenge`, meant to be nested under `/auth`.
///
/// The store is shared with whatever consumes the challenges, so it is taken
/// as an `Arc`.
pub fn challenge_router<C>(store: Arc<C>) -> Router
where
    C: ChallengeStore + Send + Sync + 'static,
{
    let state = ChallengeAppState { store };

    Router::new()
        .route("/challenge", get(handlers::issue_challenge::<C>))
        .with_state(state)
}
