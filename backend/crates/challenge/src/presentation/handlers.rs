//! HTTP Handlers

use crate::application::issue_challenge::IssueChallengeUseCase;
use crate::domain::store::ChallengeStore;
use crate::error::ChallengeResult;
use crate::presentation::dto::ChallengeResponse;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

/// Shared state for challenge handlers
pub struct ChallengeAppState<C>
where
    C: ChallengeStore + Send + Sync + 'static,
{
    pub store: Arc<C>,
}

// Manual impl: the store itself is shared, not cloned
impl<C> Clone for ChallengeAppState<C>
where
    C: ChallengeStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

/// GET /auth/challenge
pub async fn issue_challenge<C>(
    State(state): State<ChallengeAppState<C>>,
) -> ChallengeResult<Json<ChallengeResponse>>
where
    C: ChallengeStore + Send + Sync + 'static,
{
    let use_case = IssueChallengeUseCase::new(state.store.clone());

    let output = use_case.execute().await?;

    Ok(Json(ChallengeResponse {
        value: output.value,
        expires_at: output.expires_at,
    }))
}
