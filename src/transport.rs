use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// Raw result of one HTTP round trip: status code plus undecoded body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Opaque HTTP collaborator.
///
/// Connection pooling, TLS and timeouts all live behind this seam; callers
/// issue one GET and get back whatever arrived, errors included. Stub
/// implementations stand in for the network in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// Production transport over a shared `reqwest` client.
///
/// The client and its pool are built once and shared read-only across calls;
/// the request timeout is fixed at construction.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("reading body of {}", url))?;
        Ok(RawResponse { status, body })
    }
}
