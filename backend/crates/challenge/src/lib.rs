//! Challenge Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Challenge entity and the `ChallengeStore` capability
//! - `application/` - Use cases
//! - `infra/` - Store implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Security Model
//! - Challenge values are 32 OS-random bytes, base58-encoded
//! - A challenge lives for a fixed TTL (5 minutes by default)
//! - Consumption is atomic per value: of any number of concurrent callers
//!   presenting the same value, exactly one succeeds
//! - Records are kept after consumption so replays stay detectable

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ChallengeConfig;
pub use application::issue_challenge::{IssueChallengeOutput, IssueChallengeUseCase};
pub use domain::entities::{Challenge, ChallengeRejection};
pub use domain::store::{ChallengeStore, LocalChallengeStore};
pub use error::{ChallengeError, ChallengeResult};
pub use infra::memory::InMemoryChallengeStore;
pub use presentation::router::challenge_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
