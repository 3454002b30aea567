//! Domain Services
//!
//! Capability traits the login flow is written against. Implementations live
//! in `infra/`; tests substitute their own.

use crate::domain::entity::{credential::Credential, verified_signature::VerifiedSignature};
use crate::domain::value_object::wallet_address::WalletAddress;
use crate::error::AuthResult;

/// Checks a detached signature over a UTF-8 message.
///
/// Every malformed input (bad encoding, wrong length, key not on the curve)
/// and every mismatch fails with `AuthError::InvalidSignature`. The verifier
/// never consults the challenge store.
#[trait_variant::make(SignatureVerifier: Send)]
pub trait LocalSignatureVerifier {
    async fn verify(
        &self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> AuthResult<VerifiedSignature>;
}

/// Mints and checks bearer credentials.
#[trait_variant::make(CredentialIssuer: Send)]
pub trait LocalCredentialIssuer {
    /// Mint a credential for an already-verified subject
    async fn sign(&self, subject: &WalletAddress) -> AuthResult<Credential>;

    /// Resolve a presented token back to its subject.
    /// Fails with `AuthError::InvalidCredential` when forged, malformed or expired.
    async fn verify(&self, token: &str) -> AuthResult<WalletAddress>;
}
