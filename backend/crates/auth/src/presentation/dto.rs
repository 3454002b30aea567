//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use platform::crypto::to_base58;
use serde::{Deserialize, Serialize};

/// Where a rejected client should go to start over
pub const CHALLENGE_HREF: &str = "/auth/challenge";
pub const ME_HREF: &str = "/identity/me";
pub const ORDERS_HREF: &str = "/orders";

/// Hypermedia link
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Link {
    pub href: &'static str,
    pub method: &'static str,
}

impl Link {
    pub const fn get(href: &'static str) -> Self {
        Self { href, method: "GET" }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Signature as sent by the client: a base58 string, or the raw bytes as a
/// JSON number array (what `Uint8Array` serializes to in most wallet SDKs)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SignaturePayload {
    Encoded(String),
    Bytes(Vec<u8>),
}

impl SignaturePayload {
    /// Normalize to base58
    pub fn into_encoded(self) -> String {
        match self {
            SignaturePayload::Encoded(s) => s,
            SignaturePayload::Bytes(bytes) => to_base58(&bytes),
        }
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The challenge value, exactly as signed
    pub message: String,
    pub signature: SignaturePayload,
    #[serde(alias = "wallet")]
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginLinks {
    pub me: Link,
    pub orders: Link,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: LoginLinks,
}

impl LoginResponse {
    pub fn bearer(token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            token_type: "Bearer",
            expires_at,
            links: LoginLinks {
                me: Link::get(ME_HREF),
                orders: Link::get(ORDERS_HREF),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChallengeLinks {
    pub challenge: Link,
}

/// Body for every rejected login, whatever the underlying reason
#[derive(Debug, Clone, Serialize)]
pub struct LoginFailureResponse {
    pub error: &'static str,
    pub message: &'static str,
    #[serde(rename = "_links")]
    pub links: ChallengeLinks,
}

impl Default for LoginFailureResponse {
    fn default() -> Self {
        Self {
            error: "INVALID_SIGNATURE",
            message: "Signature verification failed",
            links: ChallengeLinks {
                challenge: Link::get(CHALLENGE_HREF),
            },
        }
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Body for a rejected bearer token
#[derive(Debug, Clone, Serialize)]
pub struct CredentialFailureResponse {
    pub error: &'static str,
    pub message: &'static str,
}

impl Default for CredentialFailureResponse {
    fn default() -> Self {
        Self {
            error: "INVALID_CREDENTIAL",
            message: "Credential is invalid or expired",
        }
    }
}

/// Response for GET /identity/me
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub wallet: String,
}
