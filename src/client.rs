//! Attestation client: the protocol state machine
//!
//! One call to [`AttestationClient::generate_attestation_for`] runs the full
//! flow:
//! 1. Check platform support (bypass, where permitted, skips real hardware)
//! 2. Generate a fresh challenge id and request a one-time server challenge
//! 3. Hash the challenge (SHA-256 of its UTF-8 bytes)
//! 4. Look up the cached key identifier, generating and persisting one if absent
//! 5. Ask the platform to attest the key over the hash
//! 6. Exchange the base64-encoded proof for a bearer token
//!
//! If the platform reports the cached key invalid at step 5, the client
//! regenerates the key, persists it over the stale one, and retries the
//! attestation exactly once. A second failure of any kind surfaces to the
//! caller. No other step is ever retried here; transport retry policy belongs
//! to the HTTP layer.

use crate::api::{ChallengeClient, TokenClient, TokenRequest};
use crate::environment::{force_attest_test, Environment};
use crate::error::{Error, Result};
use crate::provider::{
    AttestationProvider, AuthToken, BypassProvider, ClientDataHash, KeyIdentifier,
};
use crate::store::AttestationKeyStore;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Orchestrates the challenge/attest/token exchange against one environment.
///
/// The hardware capability and the key store are injected; the environment is
/// fixed at construction and decides the endpoints and whether bypass requests
/// are honored.
pub struct AttestationClient {
    environment: Environment,
    provider: Arc<dyn AttestationProvider>,
    store: Arc<dyn AttestationKeyStore>,
    challenge_client: ChallengeClient,
    token_client: TokenClient,
    // Serializes the get-or-generate-and-persist sequence so concurrent first
    // calls do not each mint a key and race to persist it.
    key_lock: tokio::sync::Mutex<()>,
}

impl AttestationClient {
    /// Client over the default reqwest transport
    pub fn new(
        environment: Environment,
        provider: Arc<dyn AttestationProvider>,
        store: Arc<dyn AttestationKeyStore>,
    ) -> Self {
        Self::with_transport(environment, provider, store, Arc::new(ReqwestTransport::new()))
    }

    /// Client over a caller-supplied transport (pinning, proxying, tests)
    pub fn with_transport(
        environment: Environment,
        provider: Arc<dyn AttestationProvider>,
        store: Arc<dyn AttestationKeyStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            environment,
            provider,
            store,
            challenge_client: ChallengeClient::new(environment, transport.clone()),
            token_client: TokenClient::new(environment, transport),
            key_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Run the full attestation flow and return the bearer token.
    ///
    /// Equivalent to [`generate_attestation_with`](Self::generate_attestation_with)
    /// without bypass.
    pub async fn generate_attestation_for(
        &self,
        target_url: &str,
        bundle_id: &str,
    ) -> Result<AuthToken> {
        self.generate_attestation_with(target_url, bundle_id, false).await
    }

    /// Run the full attestation flow, optionally requesting bypass mode.
    ///
    /// Bypass substitutes fixed sentinel values for the hardware key and
    /// proof, exercising the network protocol without touching the platform
    /// capability. It is honored only when the environment permits it; in
    /// production the request is not honored and the real path runs.
    pub async fn generate_attestation_with(
        &self,
        target_url: &str,
        bundle_id: &str,
        bypass_validation: bool,
    ) -> Result<AuthToken> {
        let bypass = bypass_validation && self.environment.can_bypass_validation();
        let bypass_provider = BypassProvider;
        let provider: &dyn AttestationProvider = if bypass {
            &bypass_provider
        } else {
            self.provider.as_ref()
        };

        // The bypass provider always reports supported, so this only rejects
        // real hardware that cannot attest.
        if !provider.is_supported() {
            return Err(Error::NotSupported);
        }

        let challenge_id = Uuid::new_v4().to_string();
        let challenge = self.challenge_client.request_challenge(&challenge_id).await?;
        let hash = ClientDataHash::from_challenge(&challenge);
        debug!(%challenge_id, hash = %hash.to_hex(), "server challenge hashed");

        // Sentinel keys are ephemeral; only real keys go through the store.
        let key = if bypass {
            provider.generate_key().await?
        } else {
            self.cached_or_generated_key(provider).await?
        };

        let (key, blob) = match provider.attest(&key, &hash).await {
            Ok(blob) => (key, blob),
            Err(Error::InvalidKey) => {
                warn!(%key, "platform invalidated the attestation key, regenerating");
                let new_key = self.regenerate_key(provider).await?;
                let blob = provider.attest(&new_key, &hash).await?;
                (new_key, blob)
            }
            Err(other) => return Err(other),
        };

        let request = TokenRequest {
            target_url: target_url.to_string(),
            bundle_id: bundle_id.to_string(),
            key_id: key.to_string(),
            challenge_id,
            attestation: blob.to_base64(),
            force_attest_test: force_attest_test(self.environment, bypass_validation),
        };
        let token = self.token_client.exchange_for_token(&request).await?;
        debug!(key_id = %key, "attestation exchanged for token");
        Ok(token)
    }

    async fn cached_or_generated_key(
        &self,
        provider: &dyn AttestationProvider,
    ) -> Result<KeyIdentifier> {
        let _guard = self.key_lock.lock().await;
        match self.store.get() {
            Some(key) => Ok(key),
            None => {
                let key = provider.generate_key().await?;
                self.store.set(key.clone());
                debug!(key_id = %key, "generated and persisted attestation key");
                Ok(key)
            }
        }
    }

    async fn regenerate_key(&self, provider: &dyn AttestationProvider) -> Result<KeyIdentifier> {
        let _guard = self.key_lock.lock().await;
        let key = provider.generate_key().await?;
        self.store.set(key.clone());
        Ok(key)
    }
}
