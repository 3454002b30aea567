//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod identify;
pub mod login;

// Re-exports
pub use config::AuthConfig;
pub use identify::IdentifyUseCase;
pub use login::{LoginInput, LoginStage, LoginUseCase};
