//! Auth Middleware
//!
//! Guards routes behind a bearer credential.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::IdentifyUseCase;
use crate::domain::service::CredentialIssuer;
use crate::domain::value_object::wallet_address::WalletAddress;
use crate::error::AuthError;

/// Middleware state
pub struct CredentialMiddlewareState<I>
where
    I: CredentialIssuer + Send + Sync + 'static,
{
    pub issuer: Arc<I>,
}

impl<I> Clone for CredentialMiddlewareState<I>
where
    I: CredentialIssuer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            issuer: self.issuer.clone(),
        }
    }
}

/// Wallet resolved from the bearer token, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedWallet(pub WalletAddress);

/// `Authorization: Bearer <token>`, scheme matched case-insensitively
pub fn bearer_token(req: &Request<Body>) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware that requires a valid credential
pub async fn require_credential<I>(
    State(state): State<CredentialMiddlewareState<I>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    I: CredentialIssuer + Send + Sync + 'static,
{
    let token = bearer_token(&req)
        .map(str::to_owned)
        .ok_or(AuthError::InvalidCredential)?;

    let wallet = IdentifyUseCase::new(state.issuer.clone())
        .execute(&token)
        .await?;

    req.extensions_mut().insert(AuthenticatedWallet(wallet));

    Ok(next.run(req).await)
}
