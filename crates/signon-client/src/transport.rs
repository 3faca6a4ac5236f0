//! HTTP transport — the single seam between the session manager and the
//! network.
//!
//! [`HttpTransport`] is the production implementation over `reqwest`; tests
//! and embedders can swap in their own [`Transport`] to observe or suppress
//! traffic.

use async_trait::async_trait;
use tracing::debug;

use crate::error::TransportError;

// ─────────────────────────────────────────────
// Transport trait
// ─────────────────────────────────────────────

/// Issues a single JSON POST and returns the parsed response body.
///
/// One shot: no retry, no backoff, no timeout beyond the client default.
/// `operation` is a short label ("login", "logout") carried into errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with `Content-Type: application/json`.
    async fn post(
        &self,
        url: &str,
        operation: &'static str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}

// ─────────────────────────────────────────────
// HttpTransport
// ─────────────────────────────────────────────

/// Production [`Transport`] over a shared, connection-pooled
/// `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default client (30 s timeout).
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        HttpTransport { client }
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    pub fn with_client(client: reqwest::Client) -> Self {
        HttpTransport { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        operation: &'static str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError> {
        debug!(%url, operation, "POST");

        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                operation,
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportError::Malformed {
                operation,
                detail: e.to_string(),
            })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
