use std::sync::Arc;

use anyhow::{Context, Result};
use moviedex_core::{Config, MovieCatalog, Record, RecordStore, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn MovieCatalog>,
    store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn MovieCatalog>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config,
            catalog,
            store,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> &dyn MovieCatalog {
        self.catalog.as_ref()
    }

    /// Insert-or-replace on a blocking thread, waiting for it to finish.
    pub async fn upsert(&self, records: Vec<Record>) -> Result<usize> {
        let store = Arc::clone(&self.store);
        let written = tokio::task::spawn_blocking(move || store.upsert(&records))
            .await
            .context("Record store task failed")?
            .context("Failed to write records")?;
        Ok(written)
    }

    /// Full table read on a blocking thread, waiting for it to finish.
    pub async fn fetch_all(&self) -> Result<Vec<Record>> {
        let store = Arc::clone(&self.store);
        let records = tokio::task::spawn_blocking(move || store.fetch_all())
            .await
            .context("Record store task failed")?
            .context("Failed to read records")?;
        Ok(records)
    }
}
