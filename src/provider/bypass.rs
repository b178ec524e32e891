//! Sentinel provider for exercising the protocol without hardware

use super::types::{AttestationBlob, ClientDataHash, KeyIdentifier};
use super::AttestationProvider;
use crate::error::Result;
use async_trait::async_trait;

/// Key identifier returned by the bypass provider
pub const BYPASS_KEY_ID: &str = "bypass-key-id";

/// Attestation payload returned by the bypass provider
pub const BYPASS_ATTESTATION: &[u8] = b"bypass-attestation";

/// Provider that skips real hardware attestation and answers with fixed
/// sentinel values.
///
/// Used solely to exercise the challenge/token network layers in environments
/// that permit bypass; the orchestrator never selects it in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct BypassProvider;

#[async_trait]
impl AttestationProvider for BypassProvider {
    fn is_supported(&self) -> bool {
        true
    }

    async fn generate_key(&self) -> Result<KeyIdentifier> {
        Ok(KeyIdentifier::new(BYPASS_KEY_ID))
    }

    async fn attest(&self, _key: &KeyIdentifier, _hash: &ClientDataHash) -> Result<AttestationBlob> {
        Ok(AttestationBlob::new(BYPASS_ATTESTATION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sentinels_are_fixed() {
        let provider = BypassProvider;
        assert!(provider.is_supported());

        let key = provider.generate_key().await.unwrap();
        assert_eq!(key.as_str(), BYPASS_KEY_ID);

        let hash = ClientDataHash::from_challenge("whatever");
        let blob = provider.attest(&key, &hash).await.unwrap();
        assert_eq!(blob.as_bytes(), BYPASS_ATTESTATION);

        // The blob does not depend on the challenge
        let other = provider
            .attest(&key, &ClientDataHash::from_challenge("other"))
            .await
            .unwrap();
        assert_eq!(blob, other);
    }
}
