//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations, free of any domain meaning:
//! - Cryptographic utilities (OS randomness, SHA-256, base58/base64)
//! - Clock abstraction for expiry decisions

pub mod clock;
pub mod crypto;
