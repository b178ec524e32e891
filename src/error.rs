//! Error types for the attestation client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("device attestation is not supported on this platform")]
    NotSupported,

    #[error("platform attestation capability is unavailable")]
    PlatformUnavailable,

    #[error("the platform invalidated the attestation key")]
    InvalidKey,

    #[error("platform attestation failed: {0}")]
    AttestationFailed(String),

    /// Returned by the byte-level challenge decode path
    /// ([`ClientDataHash::from_challenge_bytes`]); challenges carried as JSON
    /// strings are always valid UTF-8 and never hit this.
    ///
    /// [`ClientDataHash::from_challenge_bytes`]: crate::ClientDataHash::from_challenge_bytes
    #[error("server challenge is not valid UTF-8")]
    InvalidChallengeEncoding,

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server returned HTTP {status}: {body}")]
    Server { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
