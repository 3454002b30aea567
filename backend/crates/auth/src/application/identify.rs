//! Identify Use Case
//!
//! Resolves a bearer token to the wallet it was issued for.

use std::sync::Arc;

use crate::domain::service::CredentialIssuer;
use crate::domain::value_object::wallet_address::WalletAddress;
use crate::error::AuthResult;

pub struct IdentifyUseCase<I>
where
    I: CredentialIssuer,
{
    issuer: Arc<I>,
}

impl<I> IdentifyUseCase<I>
where
    I: CredentialIssuer,
{
    pub fn new(issuer: Arc<I>) -> Self {
        Self { issuer }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<WalletAddress> {
        self.issuer.verify(token).await
    }
}
