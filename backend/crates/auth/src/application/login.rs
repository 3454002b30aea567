//! Login Use Case
//!
//! Exchanges a signed challenge for a credential. The steps run strictly in
//! order and each one gates the next:
//!
//! 1. verify the signature over `message` (no state is touched on failure)
//! 2. consume `message` as a challenge (single use, first consumer wins)
//! 3. sign a credential for the key that verified, never the raw input
//!
//! A challenge consumed in step 2 stays consumed even if step 3 fails or the
//! caller goes away. The client fetches a fresh challenge to retry.

use challenge::ChallengeStore;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entity::credential::Credential;
use crate::domain::service::{CredentialIssuer, SignatureVerifier};
use crate::error::{AuthError, AuthResult};

/// Login input
#[derive(Debug, Clone)]
pub struct LoginInput {
    /// The challenge value, exactly as it was signed
    pub message: String,
    /// Base58 detached signature
    pub signature: String,
    /// Base58 public key the client claims signed the message
    pub public_key: String,
}

/// How far a login attempt got, for failure logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStage {
    Start,
    SignatureChecked,
    ChallengeConsumed,
    CredentialIssued,
}

impl fmt::Display for LoginStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            LoginStage::Start => "start",
            LoginStage::SignatureChecked => "signature_checked",
            LoginStage::ChallengeConsumed => "challenge_consumed",
            LoginStage::CredentialIssued => "credential_issued",
        };
        f.write_str(stage)
    }
}

/// Login use case
pub struct LoginUseCase<S, C, I>
where
    S: SignatureVerifier,
    C: ChallengeStore,
    I: CredentialIssuer,
{
    verifier: Arc<S>,
    challenges: Arc<C>,
    issuer: Arc<I>,
}

impl<S, C, I> LoginUseCase<S, C, I>
where
    S: SignatureVerifier,
    C: ChallengeStore,
    I: CredentialIssuer,
{
    pub fn new(verifier: Arc<S>, challenges: Arc<C>, issuer: Arc<I>) -> Self {
        Self {
            verifier,
            challenges,
            issuer,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<Credential> {
        let mut stage = LoginStage::Start;

        let result = self.run(&input, &mut stage).await;

        match &result {
            Ok(credential) => {
                tracing::info!(
                    wallet = %credential.subject,
                    credential_id = %credential.credential_id,
                    "Login succeeded"
                );
            }
            Err(e) => {
                tracing::info!(stage = %stage, error = %e, "Login failed");
            }
        }

        result
    }

    /// [`execute`](Self::execute) bounded by `timeout`.
    ///
    /// Expiry drops the in-flight attempt wherever it is; a challenge that
    /// was already consumed is not restored.
    pub async fn execute_within(
        &self,
        input: LoginInput,
        timeout: Duration,
    ) -> AuthResult<Credential> {
        tokio::time::timeout(timeout, self.execute(input))
            .await
            .map_err(|_| AuthError::Timeout)?
    }

    async fn run(&self, input: &LoginInput, stage: &mut LoginStage) -> AuthResult<Credential> {
        let verified = self
            .verifier
            .verify(&input.message, &input.signature, &input.public_key)
            .await?;
        *stage = LoginStage::SignatureChecked;

        tracing::debug!(
            signer = %verified.signer,
            message_hash = %verified.message_hash,
            "Signature verified"
        );

        self.challenges.consume(&input.message).await?;
        *stage = LoginStage::ChallengeConsumed;

        let credential = self.issuer.sign(&verified.signer).await?;
        *stage = LoginStage::CredentialIssued;

        Ok(credential)
    }
}
