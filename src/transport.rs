//! HTTP transport seam
//!
//! The core builds JSON request bodies and parses response envelopes; the
//! actual request execution lives behind [`HttpTransport`] so tests can script
//! responses and hosts can swap in their own stack (pinning, proxying,
//! timeouts all belong there, not here).

use crate::error::Result;
use async_trait::async_trait;

/// Raw response handed back by the transport: status plus body bytes.
/// Envelope parsing happens in the protocol clients.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single JSON POST. No retry, no backoff: transport-level retry
/// policy is the host's concern.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<HttpResponse>;
}

/// Production transport over [`reqwest::Client`]
#[derive(Debug, Default, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
