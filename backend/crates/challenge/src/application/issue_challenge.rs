//! Issue Challenge Use Case

use crate::domain::store::ChallengeStore;
use crate::error::ChallengeResult;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Output DTO for issue challenge
#[derive(Debug, Clone)]
pub struct IssueChallengeOutput {
    pub value: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issue Challenge Use Case
pub struct IssueChallengeUseCase<C>
where
    C: ChallengeStore,
{
    store: Arc<C>,
}

impl<C> IssueChallengeUseCase<C>
where
    C: ChallengeStore,
{
    pub fn new(store: Arc<C>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> ChallengeResult<IssueChallengeOutput> {
        let challenge = self.store.create().await?;

        tracing::info!(
            expires_at_ms = challenge.expires_at_ms,
            "Issued challenge"
        );

        Ok(IssueChallengeOutput {
            issued_at: challenge.issued_at(),
            expires_at: challenge.expires_at(),
            value: challenge.value,
        })
    }
}
