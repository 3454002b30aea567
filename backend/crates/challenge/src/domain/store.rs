//! Store Traits
//!
//! Interface for challenge issuance and consumption. Implementations live in
//! the infrastructure layer.

use crate::domain::entities::Challenge;
use crate::error::ChallengeResult;

/// Challenge store capability
#[trait_variant::make(ChallengeStore: Send)]
pub trait LocalChallengeStore {
    /// Issue a fresh, unpredictable challenge and record it as unconsumed
    async fn create(&self) -> ChallengeResult<Challenge>;

    /// Atomically mark `value` as consumed.
    ///
    /// Fails with `InvalidChallenge` if `value` was never issued, was already
    /// consumed, or is past its expiry.
    async fn consume(&self, value: &str) -> ChallengeResult<()>;
}
