//! # device-attest
//!
//! Client for device attestation: proves to a remote server that a request
//! originates from a genuine, untampered application on trusted hardware, and
//! exchanges that proof for a short-lived bearer token.
//!
//! ## Flow
//!
//! One call to [`AttestationClient::generate_attestation_for`] performs the
//! whole exchange:
//!
//! 1. Request a one-time server challenge, bound to a fresh challenge id
//! 2. Hash the challenge (SHA-256)
//! 3. Reuse the cached hardware key, or generate and persist one
//! 4. Ask the platform capability to attest the key over the hash
//! 5. Exchange the base64-encoded proof for a bearer token
//!
//! If the platform invalidated the cached key (OS security posture changes can
//! do this at any time), the client regenerates it and retries the attestation
//! exactly once; every other failure surfaces immediately as one typed
//! [`Error`].
//!
//! The hardware primitive ([`AttestationProvider`]), key persistence
//! ([`AttestationKeyStore`]) and HTTP execution ([`HttpTransport`]) are
//! injected, so hosts bring their platform bindings and tests substitute
//! scripted fakes. Non-production environments may run in *bypass mode*,
//! exercising the network protocol with fixed sentinel values instead of real
//! hardware.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use device_attest::{AttestationClient, Environment, InMemoryKeyStore, MOBILE_TOKEN_HEADER};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // `AppAttestProvider` stands in for the host application's binding to
//!     // its platform capability; this crate does not ship one.
//!     let client = AttestationClient::new(
//!         Environment::Production,
//!         Arc::new(AppAttestProvider::new()),
//!         Arc::new(InMemoryKeyStore::new()),
//!     );
//!
//!     let token = client
//!         .generate_attestation_for("https://login.infomaniak.com", "com.infomaniak.mail")
//!         .await?;
//!
//!     // Present the token on subsequent protected requests
//!     // under the MOBILE_TOKEN_HEADER header.
//!     println!("{}: {}", MOBILE_TOKEN_HEADER, token.as_str());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod environment;
pub mod error;
pub mod provider;
pub mod store;
pub mod transport;

pub use client::AttestationClient;
pub use environment::{force_attest_test, Environment, MOBILE_TOKEN_HEADER};
pub use error::{Error, Result};
pub use provider::{
    AttestationBlob, AttestationProvider, AuthToken, BypassProvider, ClientDataHash, KeyIdentifier,
};
pub use store::{AttestationKeyStore, InMemoryKeyStore, DEVICE_KEY_STORAGE_KEY};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
