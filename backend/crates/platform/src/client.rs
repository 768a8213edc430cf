//! Outbound HTTP client utilities
//!
//! Builds the shared `reqwest` client used for catalog and artwork calls,
//! and classifies transport failures into a small closed set so feature
//! crates can map them onto their own error types.

use std::time::Duration;

/// Default User-Agent sent on every outbound request
pub const DEFAULT_USER_AGENT: &str = "PokeAPI-Client/1.0";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Outbound client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Classified outbound failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportFailure {
    #[error("Request timed out")]
    Timeout,

    #[error("Failed to connect to upstream")]
    Connect,

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Unexpected transport error: {0}")]
    Other(String),
}

/// Build a client carrying the configured User-Agent and timeout
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, TransportFailure> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .build()
        .map_err(|e| TransportFailure::Other(e.to_string()))
}

/// Map a `reqwest` error onto [`TransportFailure`]
///
/// Timeout is checked first: a connect attempt that runs out the clock
/// is reported as a timeout, not as a connection failure.
pub fn classify(err: &reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout
    } else if err.is_connect() {
        TransportFailure::Connect
    } else if let Some(status) = err.status() {
        TransportFailure::Status(status.as_u16())
    } else {
        TransportFailure::Other(err.to_string())
    }
}

/// Plain GET of a binary resource
///
/// Not rate limited. Non-2xx answers are reported as [`TransportFailure::Status`].
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, TransportFailure> {
    let response = client.get(url).send().await.map_err(|e| {
        let failure = classify(&e);
        tracing::error!(url = %url, error = %failure, "Resource fetch failed");
        failure
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!(url = %url, status = status.as_u16(), "Resource fetch returned error status");
        return Err(TransportFailure::Status(status.as_u16()));
    }

    let bytes = response.bytes().await.map_err(|e| {
        let failure = classify(&e);
        tracing::error!(url = %url, error = %failure, "Resource body read failed");
        failure
    })?;
    tracing::debug!(url = %url, len = bytes.len(), "Fetched resource");
    Ok(bytes.to_vec())
}
