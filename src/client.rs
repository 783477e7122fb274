use crate::connectivity::Connectivity;
use crate::transport::Transport;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Deserialized payload of the ping endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Why a ping did not produce a response.
///
/// None of these are retried here; a caller that wants another attempt
/// issues a fresh `ping()`.
#[derive(Debug, Error)]
pub enum PingError {
    #[error("no internet connection available")]
    NoConnectivity,
    #[error("transport failure")]
    Transport(#[source] anyhow::Error),
    #[error("response body did not decode as a ping payload")]
    Decode(#[source] serde_json::Error),
}

/// A completed round trip: decoded body plus the raw HTTP status.
///
/// The status is passed through uninterpreted; a 503 with a well-formed body
/// is a success at this layer, and callers decide what the code means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingSuccess {
    pub response: PingResponse,
    pub status: u16,
}

pub type PingResult = Result<PingSuccess, PingError>;

/// Connectivity-gated ping client.
///
/// Each call is stateless and independent: check the network, issue one GET
/// to `<base_url>ping`, decode the body. The connectivity check strictly
/// precedes the call, so an unreachable host never costs a transport attempt.
pub struct PingClient {
    transport: Arc<dyn Transport>,
    connectivity: Arc<dyn Connectivity>,
    base_url: String,
}

impl PingClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        connectivity: Arc<dyn Connectivity>,
        base_url: &str,
    ) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        PingClient {
            transport,
            connectivity,
            base_url,
        }
    }

    pub async fn ping(&self) -> PingResult {
        if !self.connectivity.is_available() {
            tracing::warn!("ping skipped: no usable network");
            return Err(PingError::NoConnectivity);
        }

        let url = format!("{}ping", self.base_url);
        tracing::debug!("pinging {}", url);

        let raw = self.transport.get(&url).await.map_err(PingError::Transport)?;

        let response: PingResponse =
            serde_json::from_slice(&raw.body).map_err(PingError::Decode)?;

        tracing::debug!("ping answered with status {}", raw.status);
        Ok(PingSuccess {
            response,
            status: raw.status,
        })
    }
}
