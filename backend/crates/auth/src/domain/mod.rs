//! Domain Layer
//!
//! - `value_object/` - wallet address
//! - `entity/` - verified signature, issued credential
//! - `service` - capability traits for signature verification and credentials

pub mod entity;
pub mod service;
pub mod value_object;
