//! Credential Entity
//!
//! A signed bearer token bound to the wallet that proved key ownership.

use crate::domain::value_object::wallet_address::WalletAddress;
use chrono::{DateTime, Utc};
use kernel::id::CredentialId;

#[derive(Debug, Clone)]
pub struct Credential {
    /// Opaque token handed to the client
    pub token: String,
    pub subject: WalletAddress,
    /// Unique per issuance (`jti`)
    pub credential_id: CredentialId,
    pub issued_at_ms: i64,
    pub expires_at_ms: i64,
}

impl Credential {
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.expires_at_ms).unwrap_or_default()
    }
}
