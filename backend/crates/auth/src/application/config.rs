//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::crypto::random_bytes;
use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC key for signing credentials (32 bytes)
    pub credential_secret: [u8; 32],
    /// Credential lifetime (1 hour)
    pub credential_ttl: Duration,
    /// `iss` claim written into and required on every credential
    pub issuer: String,
    /// Upper bound on a single login attempt
    pub login_timeout: Duration,
}

/// A fresh random key: credentials signed with it do not survive a restart
impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_random_secret()
    }
}

impl AuthConfig {
    /// Config with the given signing secret
    pub fn with_secret(credential_secret: [u8; 32]) -> Self {
        Self {
            credential_secret,
            credential_ttl: Duration::from_secs(3600), // 1 hour
            issuer: "wallet-auth".to_string(),
            login_timeout: Duration::from_secs(10),
        }
    }

    /// Create config with a random credential secret
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&random_bytes(32));
        Self::with_secret(secret)
    }

    /// Create config for development
    pub fn development() -> Self {
        Self {
            credential_ttl: Duration::from_secs(24 * 3600),
            ..Self::with_random_secret()
        }
    }

    pub fn credential_ttl_secs(&self) -> i64 {
        self.credential_ttl.as_secs() as i64
    }
}
