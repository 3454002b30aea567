//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - The `Challenge` entity and its single-use lifecycle
//! - The `ChallengeStore` capability trait

pub mod entities;
pub mod store;
