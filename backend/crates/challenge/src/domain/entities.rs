//! Domain Entities
//!
//! Core business entities for the challenge domain.

use chrono::{DateTime, Utc};
use std::fmt;

/// Challenge entity - a single-use, time-bound nonce the client must sign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Opaque nonce; the exact string the wallet signs
    pub value: String,
    pub issued_at_ms: i64,
    pub expires_at_ms: i64,
    pub consumed: bool,
}

/// Why a challenge could not be consumed.
///
/// Callers only ever see `InvalidChallenge`; the reason is kept for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeRejection {
    /// Never issued by this store
    Unknown,
    AlreadyConsumed,
    Expired,
}

impl fmt::Display for ChallengeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ChallengeRejection::Unknown => "unknown",
            ChallengeRejection::AlreadyConsumed => "already consumed",
            ChallengeRejection::Expired => "expired",
        };
        f.write_str(reason)
    }
}

impl Challenge {
    pub fn new(value: String, issued_at_ms: i64, ttl_ms: i64) -> Self {
        Self {
            value,
            issued_at_ms,
            expires_at_ms: issued_at_ms + ttl_ms,
            consumed: false,
        }
    }

    /// A challenge is still valid at exactly `expires_at_ms`
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.issued_at_ms).unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.expires_at_ms).unwrap_or_default()
    }

    /// Transition `unconsumed -> consumed`.
    ///
    /// Fails without mutating if already consumed or expired. Callers must
    /// hold exclusive access to the record for this to be race-free.
    pub fn consume_at(&mut self, now_ms: i64) -> Result<(), ChallengeRejection> {
        if self.consumed {
            return Err(ChallengeRejection::AlreadyConsumed);
        }
        if self.is_expired_at(now_ms) {
            return Err(ChallengeRejection::Expired);
        }
        self.consumed = true;
        Ok(())
    }
}
