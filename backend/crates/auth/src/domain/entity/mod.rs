pub mod credential;
pub mod verified_signature;
