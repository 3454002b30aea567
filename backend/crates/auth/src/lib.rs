//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Wallet address, verified signature, credential, capability traits
//! - `application/` - Login and identify use cases
//! - `infra/` - Ed25519 verifier, JWT issuer
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Wallet login: sign a server-issued challenge, receive a bearer credential
//! - Solana-style keys and signatures (ed25519, base58)
//! - Bearer-guarded identity endpoint
//!
//! ## Security Model
//! - Signature is verified before the challenge is touched, so a bad
//!   signature cannot burn someone else's challenge
//! - Each challenge yields at most one credential
//! - The credential subject is the key that verified, never the claimed one
//! - Every login rejection has the same response body

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{IdentifyUseCase, LoginInput, LoginStage, LoginUseCase};
pub use domain::entity::{credential::Credential, verified_signature::VerifiedSignature};
pub use domain::service::{
    CredentialIssuer, LocalCredentialIssuer, LocalSignatureVerifier, SignatureVerifier,
};
pub use domain::value_object::wallet_address::{WalletAddress, WalletAddressError};
pub use error::{AuthError, AuthResult, LoginFailure};
pub use infra::{Ed25519SignatureVerifier, JwtCredentialIssuer};
pub use presentation::router::{auth_router, identity_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
