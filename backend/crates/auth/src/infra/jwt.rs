//! JWT Credential Issuer
//!
//! HS256 tokens carrying the wallet address as `sub`. Expiry is checked
//! against the injected [`Clock`] rather than by `jsonwebtoken`, so the
//! same clock drives issuance and validation.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::CredentialId;
use platform::clock::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::credential::Credential;
use crate::domain::service::CredentialIssuer;
use crate::domain::value_object::wallet_address::WalletAddress;
use crate::error::{AuthError, AuthResult};

/// Registered claims written into every credential
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialClaims {
    /// Wallet address
    pub sub: String,
    pub jti: String,
    /// Seconds since the epoch
    pub iat: i64,
    /// Seconds since the epoch; the token is dead from this second on
    pub exp: i64,
    pub iss: String,
}

pub struct JwtCredentialIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: Arc<AuthConfig>,
    clock: Arc<dyn Clock>,
}

impl JwtCredentialIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Arc<AuthConfig>, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(&config.credential_secret),
            decoding_key: DecodingKey::from_secret(&config.credential_secret),
            validation,
            config,
            clock,
        }
    }

    /// Decode and validate, returning the raw claims
    pub fn decode_claims(&self, token: &str) -> AuthResult<CredentialClaims> {
        let data = decode::<CredentialClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Credential failed to decode");
                AuthError::InvalidCredential
            })?;

        let now_s = self.clock.now_ms().div_euclid(1000);
        if now_s >= data.claims.exp {
            tracing::debug!(exp = data.claims.exp, now = now_s, "Credential expired");
            return Err(AuthError::InvalidCredential);
        }

        Ok(data.claims)
    }
}

impl CredentialIssuer for JwtCredentialIssuer {
    async fn sign(&self, subject: &WalletAddress) -> AuthResult<Credential> {
        let credential_id = CredentialId::new();
        let iat = self.clock.now_ms().div_euclid(1000);
        let exp = iat + self.config.credential_ttl_secs();

        let claims = CredentialClaims {
            sub: subject.as_str().to_string(),
            jti: credential_id.to_string(),
            iat,
            exp,
            iss: self.config.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("credential encoding failed: {e}")))?;

        Ok(Credential {
            token,
            subject: subject.clone(),
            credential_id,
            issued_at_ms: iat * 1000,
            expires_at_ms: exp * 1000,
        })
    }

    async fn verify(&self, token: &str) -> AuthResult<WalletAddress> {
        let claims = self.decode_claims(token)?;

        WalletAddress::parse(&claims.sub).map_err(|e| {
            tracing::warn!(error = %e, "Credential subject is not a wallet address");
            AuthError::InvalidCredential
        })
    }
}
