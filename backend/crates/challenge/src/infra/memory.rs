//! In-memory Challenge Store
//!
//! Records live in a sharded `DashMap`. `consume` holds the entry's write
//! guard for the whole check-and-mark, so two callers presenting the same
//! value are serialized while unrelated values proceed in parallel.

use crate::application::config::ChallengeConfig;
use crate::domain::entities::{Challenge, ChallengeRejection};
use crate::domain::store::ChallengeStore;
use crate::error::{ChallengeError, ChallengeResult};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use platform::clock::{Clock, SystemClock};
use platform::crypto::random_token;
use std::sync::Arc;

pub struct InMemoryChallengeStore {
    challenges: DashMap<String, Challenge>,
    config: Arc<ChallengeConfig>,
    clock: Arc<dyn Clock>,
}

impl InMemoryChallengeStore {
    pub fn new(config: Arc<ChallengeConfig>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Arc<ChallengeConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            challenges: DashMap::new(),
            config,
            clock,
        }
    }

    /// Snapshot of a record, consumed or not
    pub fn get(&self, value: &str) -> Option<Challenge> {
        self.challenges.get(value).map(|entry| entry.value().clone())
    }

    /// Number of records ever issued
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

impl ChallengeStore for InMemoryChallengeStore {
    async fn create(&self) -> ChallengeResult<Challenge> {
        let value = random_token(self.config.challenge_bytes_len);
        let challenge = Challenge::new(
            value,
            self.clock.now_ms(),
            self.config.challenge_ttl_ms(),
        );

        match self.challenges.entry(challenge.value.clone()) {
            // Never overwrite a record: that would resurrect a consumed value
            Entry::Occupied(_) => Err(ChallengeError::Internal(
                "challenge value collision".to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(challenge.clone());
                Ok(challenge)
            }
        }
    }

    async fn consume(&self, value: &str) -> ChallengeResult<()> {
        let now_ms = self.clock.now_ms();

        let Some(mut record) = self.challenges.get_mut(value) else {
            return Err(ChallengeError::InvalidChallenge(ChallengeRejection::Unknown));
        };

        record
            .consume_at(now_ms)
            .map_err(ChallengeError::InvalidChallenge)
    }
}
