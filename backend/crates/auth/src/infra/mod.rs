//! Infrastructure Layer
//!
//! Concrete signature and credential implementations.

pub mod ed25519;
pub mod jwt;

pub use ed25519::Ed25519SignatureVerifier;
pub use jwt::JwtCredentialIssuer;
