//! Persistent storage for the attestation key identifier
//!
//! The key identifier survives process restarts so the same hardware key is
//! reused for every attestation until the platform invalidates it. Host
//! applications back this with their platform storage (Keychain, Keystore,
//! preferences); [`InMemoryKeyStore`] ships for tests and short-lived hosts.

use crate::provider::KeyIdentifier;
use std::sync::Mutex;

/// Storage key name persistent implementations should file the identifier
/// under, so installs stay compatible across host versions.
pub const DEVICE_KEY_STORAGE_KEY: &str = "DeviceCheckKeyId";

/// Get/set storage for the single durable key identifier.
///
/// No expiry: a stored value is considered valid until the platform explicitly
/// reports it invalid, at which point the orchestrator overwrites it.
pub trait AttestationKeyStore: Send + Sync {
    /// Previously persisted identifier, if any
    fn get(&self) -> Option<KeyIdentifier>;

    /// Persist `key`, overwriting any prior value
    fn set(&self, key: KeyIdentifier);
}

/// Mutex-guarded single-slot store, no persistence across restarts
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    slot: Mutex<Option<KeyIdentifier>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttestationKeyStore for InMemoryKeyStore {
    fn get(&self) -> Option<KeyIdentifier> {
        self.slot.lock().unwrap().clone()
    }

    fn set(&self, key: KeyIdentifier) {
        *self.slot.lock().unwrap() = Some(key);
    }
}
