//! HTTP plumbing for the catalog client.

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

/// Transport-level failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS or body read failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Performs one GET against the catalog endpoint.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Send `query` as URL query parameters and return the raw body.
    ///
    /// Decoding is left to the caller.
    async fn get(&self, query: &[(&str, String)]) -> Result<Vec<u8>, TransportError>;
}

/// reqwest-backed transport.
///
/// Uses the platform default timeouts.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get(&self, query: &[(&str, String)]) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        debug!("Catalog responded with HTTP {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
