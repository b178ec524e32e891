//! Wire protocol: request bodies, response envelopes, and the two endpoint
//! clients
//!
//! Both endpoints speak the same envelope: JSON in, `{"data": T}` out. Non-2xx
//! responses surface as [`Error::Server`] with the raw body preserved for
//! diagnostics.

use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::provider::AuthToken;
use crate::transport::{HttpResponse, HttpTransport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `{"data": T}` envelope every endpoint wraps its payload in
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Body of `POST {base}/challenge`
#[derive(Debug, Serialize)]
struct ChallengeRequest<'a> {
    challenge_id: &'a str,
}

/// Body of `POST {base}/attestation`
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub target_url: String,
    pub bundle_id: String,
    pub key_id: String,
    pub challenge_id: String,
    /// Base64-encoded attestation blob
    pub attestation: String,
    /// `"true"` to ask the server for lenient verification, see
    /// [`force_attest_test`](crate::environment::force_attest_test)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_attest_test: Option<String>,
}

fn parse_data<T: serde::de::DeserializeOwned>(response: HttpResponse) -> Result<T> {
    if !response.is_success() {
        return Err(Error::Server {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }
    let envelope: DataEnvelope<T> = serde_json::from_slice(&response.body)?;
    Ok(envelope.data)
}

/// Requests a server-issued one-time challenge bound to a challenge id
pub struct ChallengeClient {
    transport: Arc<dyn HttpTransport>,
    environment: Environment,
}

impl ChallengeClient {
    pub fn new(environment: Environment, transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport, environment }
    }

    /// `POST {base}/challenge` with `{"challenge_id": ...}`, returns the
    /// server challenge string
    pub async fn request_challenge(&self, challenge_id: &str) -> Result<String> {
        let url = format!("{}/challenge", self.environment.base_url());
        let body = serde_json::to_value(ChallengeRequest { challenge_id })?;
        let response = self.transport.post_json(&url, body).await?;
        parse_data(response)
    }
}

/// Submits the completed attestation package for a bearer token
pub struct TokenClient {
    transport: Arc<dyn HttpTransport>,
    environment: Environment,
}

impl TokenClient {
    pub fn new(environment: Environment, transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport, environment }
    }

    /// `POST {base}/attestation` with the full package, returns the token
    pub async fn exchange_for_token(&self, request: &TokenRequest) -> Result<AuthToken> {
        let url = format!("{}/attestation", self.environment.base_url());
        let body = serde_json::to_value(request)?;
        let response = self.transport.post_json(&url, body).await?;
        let token: String = parse_data(response)?;
        Ok(AuthToken::new(token))
    }
}
