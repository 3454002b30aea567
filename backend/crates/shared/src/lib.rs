//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the challenge and auth contexts:
//! - Common error kinds, the unified `AppError`, and result aliases
//! - Typed ID wrappers
//!
//! Only things with the same meaning in every context belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
