//! Movie catalog client.
//!
//! Looks films up on an OMDb-compatible web service, either by exact title or
//! by title substring. Each call is exactly one GET request: no retry, no
//! pagination. The HTTP exchange sits behind [`CatalogTransport`] so the
//! payload mapping can be exercised with canned bodies.

mod omdb;
mod transport;
mod types;

pub use omdb::OmdbClient;
pub use transport::{CatalogTransport, HttpTransport, TransportError};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::record::{EmptySearchTerm, Record, SearchPage};

/// Errors that can occur when querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The query was empty after trimming. No request was made.
    #[error("You must enter at least one character to search!")]
    EmptyInput,

    /// The request could not be completed.
    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    /// The catalog answered but reported no match. Carries its message verbatim.
    #[error("{0}")]
    NotFound(String),

    /// The catalog answered with something that does not fit the contract.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Client not configured (missing API key, bad endpoint).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

impl From<EmptySearchTerm> for CatalogError {
    fn from(_: EmptySearchTerm) -> Self {
        CatalogError::EmptyInput
    }
}

/// A remote movie catalog.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Look a film up by its exact title.
    async fn fetch_by_title(&self, title: &str) -> Result<Record, CatalogError>;

    /// Search for films whose title contains `fragment`.
    ///
    /// Returns the single page the catalog sends back.
    async fn search_by_title_substring(&self, fragment: &str)
        -> Result<SearchPage, CatalogError>;

    /// The raw payload of the last successful title lookup, if any.
    fn last_raw_result(&self) -> Option<Value>;
}
