//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response for GET /auth/challenge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}
