//! Platform attestation capability
//!
//! The hardware primitive is opaque to this crate: something that can mint an
//! attestable key pair and produce a cryptographic proof binding that key to a
//! client data hash. On Apple platforms that is `DCAppAttestService`, on
//! Android the Play Integrity / Keystore attestation path. The orchestrator
//! only ever sees the [`AttestationProvider`] trait.
//!
//! Two implementations ship with the crate:
//! - host applications supply the real one for their platform;
//! - [`BypassProvider`] returns fixed sentinels so the network protocol can be
//!   exercised without hardware, in non-production environments only.

pub mod bypass;
pub mod types;

pub use bypass::BypassProvider;
pub use types::{AttestationBlob, AuthToken, ClientDataHash, KeyIdentifier};

use crate::error::Result;
use async_trait::async_trait;

/// Opaque hardware attestation capability.
///
/// # Errors
///
/// - `generate_key` fails with [`Error::PlatformUnavailable`] when the device
///   cannot attest at all.
/// - `attest` fails with [`Error::InvalidKey`] when the platform has
///   invalidated the given key (the orchestrator recovers from this once by
///   regenerating), or [`Error::AttestationFailed`] for any other platform
///   error (never recovered).
///
/// [`Error::PlatformUnavailable`]: crate::Error::PlatformUnavailable
/// [`Error::InvalidKey`]: crate::Error::InvalidKey
/// [`Error::AttestationFailed`]: crate::Error::AttestationFailed
#[async_trait]
pub trait AttestationProvider: Send + Sync {
    /// Whether the current device/platform can perform hardware attestation
    fn is_supported(&self) -> bool;

    /// Generate a fresh attestable key pair, returning its identifier
    async fn generate_key(&self) -> Result<KeyIdentifier>;

    /// Produce an attestation proof for `key` over `hash`
    async fn attest(&self, key: &KeyIdentifier, hash: &ClientDataHash) -> Result<AttestationBlob>;
}
