//! Core types flowing through the attestation protocol

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};

/// Opaque identifier of a hardware-backed asymmetric key.
///
/// Issued by the platform capability, persisted by the key store, and reused
/// across attestations until the platform reports it invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIdentifier(String);

impl KeyIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 digest of the server challenge's UTF-8 bytes.
///
/// This is the client data hash the platform signs over, binding the
/// attestation to one server-issued challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDataHash([u8; 32]);

impl ClientDataHash {
    /// Hash a server challenge. Deterministic: the same challenge always
    /// yields the same hash.
    pub fn from_challenge(challenge: &str) -> Self {
        let digest = Sha256::digest(challenge.as_bytes());
        Self(digest.into())
    }

    /// Hash a challenge delivered as raw bytes, validating UTF-8 first.
    ///
    /// Transports that hand over raw response bodies go through here; a
    /// challenge carried as a JSON string cannot fail this check.
    pub fn from_challenge_bytes(bytes: &[u8]) -> Result<Self> {
        let challenge =
            std::str::from_utf8(bytes).map_err(|_| Error::InvalidChallengeEncoding)?;
        Ok(Self::from_challenge(challenge))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex rendering, for logs
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Binary attestation proof produced by the platform for one
/// (key, client data hash) pair. Single-use per server challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationBlob(Vec<u8>);

impl AttestationBlob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Standard base64 encoding used on the wire
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}

/// Opaque bearer token returned by the server. The sole output of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
