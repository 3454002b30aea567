//! Value Objects
//!
//! Immutable, self-validating domain primitives.

pub mod wallet_address;
