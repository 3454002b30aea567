//! Wallet Address Value Object
//!
//! A wallet address is the base58 encoding of a 32-byte ed25519 public key,
//! the format Solana wallets use for account addresses.
//!
//! ## Invariants
//! - Decodes from base58 to exactly 32 bytes
//! - The string form is canonical (re-encoding the bytes yields it)
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::wallet_address::WalletAddress;
//!
//! let address = WalletAddress::from_key_bytes(&[1u8; 32]);
//! let parsed = WalletAddress::parse(address.as_str()).unwrap();
//! assert_eq!(parsed, address);
//! ```

use platform::crypto::{from_base58, to_base58};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Length of an ed25519 public key
pub const WALLET_KEY_LENGTH: usize = 32;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletAddressError {
    #[error("wallet address is not valid base58")]
    InvalidEncoding,

    #[error("wallet address decodes to {actual} bytes, expected 32")]
    InvalidLength { actual: usize },
}

// ============================================================================
// WalletAddress
// ============================================================================

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress {
    encoded: String,
    key: [u8; WALLET_KEY_LENGTH],
}

impl WalletAddress {
    pub fn parse(input: impl AsRef<str>) -> Result<Self, WalletAddressError> {
        let bytes =
            from_base58(input.as_ref().trim()).map_err(|_| WalletAddressError::InvalidEncoding)?;
        let key: [u8; WALLET_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| WalletAddressError::InvalidLength {
                actual: bytes.len(),
            })?;
        Ok(Self::from_key_bytes(&key))
    }

    pub fn from_key_bytes(key: &[u8; WALLET_KEY_LENGTH]) -> Self {
        Self {
            encoded: to_base58(key),
            key: *key,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    #[inline]
    pub fn key_bytes(&self) -> &[u8; WALLET_KEY_LENGTH] {
        &self.key
    }
}

impl fmt::Debug for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WalletAddress").field(&self.encoded).finish()
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_roundtrip() {
        let address = WalletAddress::from_key_bytes(&[7u8; 32]);
        let parsed = WalletAddress::parse(address.as_str()).unwrap();

        assert_eq!(parsed, address);
        assert_eq!(parsed.key_bytes(), &[7u8; 32]);
    }

    #[test]
    fn test_parse_known_system_program_address() {
        // 32 zero bytes
        let parsed = WalletAddress::parse("11111111111111111111111111111111").unwrap();
        assert_eq!(parsed.key_bytes(), &[0u8; 32]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let address = WalletAddress::from_key_bytes(&[9u8; 32]);
        let padded = format!("  {}\n", address);
        assert_eq!(WalletAddress::parse(padded).unwrap(), address);
    }

    #[test]
    fn test_parse_rejects_bad_alphabet() {
        assert_eq!(
            WalletAddress::parse("TEST_PUBLIC_KEY"),
            Err(WalletAddressError::InvalidEncoding)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let short = to_base58(&[1u8; 31]);
        assert_eq!(
            WalletAddress::parse(&short),
            Err(WalletAddressError::InvalidLength { actual: 31 })
        );
    }
}
