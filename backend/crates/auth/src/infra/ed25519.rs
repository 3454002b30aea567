//! Ed25519 Signature Verifier
//!
//! Verifies detached signatures from Solana-style wallets: the public key and
//! signature are both base58, the signed bytes are the UTF-8 message.

use ed25519_dalek::{Signature, VerifyingKey};
use platform::crypto::{from_base58, sha256_hex};

use crate::domain::entity::verified_signature::VerifiedSignature;
use crate::domain::service::SignatureVerifier;
use crate::domain::value_object::wallet_address::WalletAddress;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519SignatureVerifier;

impl Ed25519SignatureVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous core of [`SignatureVerifier::verify`]
    pub fn verify_detached(
        &self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> AuthResult<VerifiedSignature> {
        let wallet = WalletAddress::parse(public_key).map_err(|e| {
            tracing::debug!(error = %e, "Rejecting malformed public key");
            AuthError::InvalidSignature
        })?;

        let verifying_key = VerifyingKey::from_bytes(wallet.key_bytes()).map_err(|_| {
            tracing::debug!("Public key is not a valid ed25519 point");
            AuthError::InvalidSignature
        })?;

        let signature_bytes = from_base58(signature.trim()).map_err(|_| {
            tracing::debug!("Rejecting signature that is not base58");
            AuthError::InvalidSignature
        })?;

        let signature = Signature::from_slice(&signature_bytes).map_err(|_| {
            tracing::debug!(len = signature_bytes.len(), "Rejecting signature of wrong length");
            AuthError::InvalidSignature
        })?;

        // Strict mode also rejects small-order keys and non-canonical R
        verifying_key
            .verify_strict(message.as_bytes(), &signature)
            .map_err(|_| AuthError::InvalidSignature)?;

        Ok(VerifiedSignature::new(
            WalletAddress::from_key_bytes(&verifying_key.to_bytes()),
            sha256_hex(message.as_bytes()),
        ))
    }
}

impl SignatureVerifier for Ed25519SignatureVerifier {
    async fn verify(
        &self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> AuthResult<VerifiedSignature> {
        self.verify_detached(message, signature, public_key)
    }
}
