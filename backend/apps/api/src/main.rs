//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::{AuthConfig, Ed25519SignatureVerifier, JwtCredentialIssuer, auth_router, identity_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use challenge::{ChallengeConfig, InMemoryChallengeStore, challenge_router};
use platform::crypto::from_base64;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 31113;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,challenge=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 = env::var("AUTH_CREDENTIAL_SECRET")
            .context("AUTH_CREDENTIAL_SECRET must be set in production")?;
        let secret_bytes = from_base64(secret_b64.trim())
            .context("AUTH_CREDENTIAL_SECRET is not valid base64")?;
        let secret = <[u8; 32]>::try_from(secret_bytes.as_slice())
            .context("AUTH_CREDENTIAL_SECRET must decode to exactly 32 bytes")?;
        AuthConfig::with_secret(secret)
    };
    let auth_config = Arc::new(auth_config);

    tracing::info!(
        issuer = %auth_config.issuer,
        credential_ttl_secs = auth_config.credential_ttl_secs(),
        login_timeout_ms = auth_config.login_timeout.as_millis() as u64,
        "Auth configured"
    );

    // Shared components: the challenge store is read by both the issuance
    // and the login routes
    let challenge_store = Arc::new(InMemoryChallengeStore::new(Arc::new(
        ChallengeConfig::default(),
    )));
    let verifier = Arc::new(Ed25519SignatureVerifier::new());
    let issuer = Arc::new(JwtCredentialIssuer::new(auth_config.clone()));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .nest(
            "/auth",
            challenge_router(challenge_store.clone()).merge(auth_router(
                verifier,
                challenge_store,
                issuer.clone(),
                auth_config,
            )),
        )
        .nest("/identity", identity_router(issuer))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("API_PORT") {
        Ok(raw) => raw.parse().context("API_PORT must be a port number")?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
