//! OMDb API client.
//!
//! OMDb answers HTTP 200 for both hits and misses; the `Response` field
//! ("True" / "False") is the discriminator and `Error` carries the message
//! on a miss. Substring search uses the service's `*fragment*` wildcard.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info};

use super::transport::{CatalogTransport, HttpTransport};
use super::types::SearchPayload;
use super::{CatalogError, MovieCatalog};
use crate::config::CatalogConfig;
use crate::record::{Record, SearchPage, SearchTerm};

/// OMDb API client.
pub struct OmdbClient<T = HttpTransport> {
    transport: T,
    api_key: String,
    last_raw: Mutex<Option<Value>>,
}

impl OmdbClient<HttpTransport> {
    /// Create a client talking HTTP to the configured endpoint.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            CatalogError::NotConfigured(format!("invalid base_url '{}': {}", config.base_url, e))
        })?;

        Self::new(config.api_key.clone(), HttpTransport::new(base_url))
    }
}

impl<T: CatalogTransport> OmdbClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn new(api_key: impl Into<String>, transport: T) -> Result<Self, CatalogError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::NotConfigured(
                "OMDb API key is required".to_string(),
            ));
        }

        Ok(Self {
            transport,
            api_key,
            last_raw: Mutex::new(None),
        })
    }

    /// Issue one request and parse the body as a JSON object.
    async fn request(&self, param: &str, value: String) -> Result<Value, CatalogError> {
        let query = [(param, value), ("apikey", self.api_key.clone())];
        let bytes = self.transport.get(&query).await?;
        let body = String::from_utf8(bytes).map_err(|e| {
            CatalogError::MalformedResponse(format!("body is not valid UTF-8: {}", e))
        })?;

        let payload: Value = serde_json::from_str(&body).map_err(|e| {
            CatalogError::MalformedResponse(format!("body is not valid JSON: {}", e))
        })?;

        if !payload.is_object() {
            return Err(CatalogError::MalformedResponse(
                "body is not a JSON object".to_string(),
            ));
        }

        Ok(payload)
    }

    fn remember(&self, payload: Value) {
        let mut last = self.last_raw.lock().unwrap_or_else(|e| e.into_inner());
        *last = Some(payload);
    }
}

/// Check the `Response` discriminator, turning a miss into `NotFound`.
fn ensure_found(payload: &Value) -> Result<(), CatalogError> {
    match payload.get("Response").and_then(Value::as_str) {
        Some("True") => Ok(()),
        Some(_) => {
            let message = payload
                .get("Error")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    CatalogError::MalformedResponse(
                        "failure response without an Error message".to_string(),
                    )
                })?;
            Err(CatalogError::NotFound(message.to_string()))
        }
        None => Err(CatalogError::MalformedResponse(
            "missing Response field".to_string(),
        )),
    }
}

#[async_trait]
impl<T: CatalogTransport> MovieCatalog for OmdbClient<T> {
    async fn fetch_by_title(&self, title: &str) -> Result<Record, CatalogError> {
        let term = SearchTerm::parse(title)?;

        debug!("OMDb title lookup: t='{}'", term);

        let payload = self.request("t", term.to_string()).await?;
        ensure_found(&payload)?;

        let record = Record::from_payload(&payload)?;
        info!("OMDb lookup matched '{}' ({})", record.title, record.year);

        self.remember(payload);
        Ok(record)
    }

    async fn search_by_title_substring(
        &self,
        fragment: &str,
    ) -> Result<SearchPage, CatalogError> {
        let term = SearchTerm::parse(fragment)?;

        debug!("OMDb substring search: s='*{}*'", term);

        let payload = self.request("s", format!("*{}*", term)).await?;
        ensure_found(&payload)?;

        let search: SearchPayload = serde_json::from_value(payload).map_err(|e| {
            CatalogError::MalformedResponse(format!("invalid search payload: {}", e))
        })?;

        let page = SearchPage::try_from(search)?;
        info!(
            "OMDb search for '{}' returned {} of {} results",
            term,
            page.shown(),
            page.total_results
        );

        Ok(page)
    }

    fn last_raw_result(&self) -> Option<Value> {
        self.last_raw
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
