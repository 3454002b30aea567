//! Verified Signature
//!
//! Proof that `signer` produced a valid signature over a message. Only the
//! signature verifier constructs one, and a failed check never yields one,
//! so holding a value is the validity flag.

use crate::domain::value_object::wallet_address::WalletAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSignature {
    /// Key that actually produced the signature
    pub signer: WalletAddress,
    /// Hex SHA-256 of the signed message, for correlating logs
    pub message_hash: String,
}

impl VerifiedSignature {
    pub fn new(signer: WalletAddress, message_hash: String) -> Self {
        Self {
            signer,
            message_hash,
        }
    }
}
