//! Mock catalog transport for testing.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{CatalogTransport, TransportError};

/// A recorded request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Value of the query parameter `name`, if it was sent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Mock implementation of the CatalogTransport trait.
///
/// Provides controllable behavior for testing:
/// - Return queued bodies in order
/// - Track requests for assertions
/// - Simulate transport failures
///
/// Clones share state, so a test can keep one handle while the client owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    /// Bodies returned by successive requests.
    bodies: Arc<RwLock<VecDeque<Vec<u8>>>>,
    /// Recorded requests.
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    /// If set, the next request will fail with this error.
    next_error: Arc<RwLock<Option<TransportError>>>,
}

impl MockTransport {
    /// Create a new mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Response Configuration
    // =========================================================================

    /// Queue a text body.
    pub async fn push_body(&self, body: impl Into<String>) {
        self.push_bytes(body.into().into_bytes()).await;
    }

    /// Queue a body byte-for-byte, valid UTF-8 or not.
    pub async fn push_bytes(&self, body: Vec<u8>) {
        self.bodies.write().await.push_back(body);
    }

    /// Queue a JSON body.
    pub async fn push_json(&self, body: Value) {
        self.push_body(body.to_string()).await;
    }

    // =========================================================================
    // Request Recording
    // =========================================================================

    /// Get all recorded requests.
    pub async fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    /// Get the number of requests performed.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next request to fail with the given error.
    pub async fn set_next_error(&self, error: TransportError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl CatalogTransport for MockTransport {
    async fn get(&self, query: &[(&str, String)]) -> Result<Vec<u8>, TransportError> {
        self.requests.write().await.push(RecordedRequest {
            params: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.bodies
            .write()
            .await
            .pop_front()
            .ok_or_else(|| TransportError::Status {
                status: 500,
                body: "no canned response queued".to_string(),
            })
    }
}
