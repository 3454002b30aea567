//! Application Configuration

use std::time::Duration;

/// Challenge application configuration
#[derive(Debug, Clone)]
pub struct ChallengeConfig {
    /// Random bytes per challenge, before base58 encoding
    pub challenge_bytes_len: usize,
    /// Time from issuance until a challenge can no longer be consumed
    pub challenge_ttl: Duration,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            challenge_bytes_len: 32,
            challenge_ttl: Duration::from_secs(5 * 60),
        }
    }
}

impl ChallengeConfig {
    pub fn challenge_ttl_ms(&self) -> i64 {
        self.challenge_ttl.as_millis() as i64
    }
}
