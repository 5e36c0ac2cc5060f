//! Title lookup screen and its save action.

use anyhow::{bail, Context, Result};
use moviedex_core::{CatalogError, Record};
use tracing::info;

use super::catalog_failure;
use crate::render;
use crate::state::AppState;
use crate::view_state::ViewState;

/// Look a film up by title and show it.
///
/// A hit replaces the held payload; a reported miss clears it. Other
/// failures leave it as it was.
pub async fn lookup(state: &AppState, view: &mut ViewState, title: &str) -> Result<String> {
    let catalog = state.catalog();
    match catalog.fetch_by_title(title).await {
        Ok(record) => {
            view.displayed_movie = catalog.last_raw_result();
            Ok(render::lookup_result(&record))
        }
        Err(CatalogError::NotFound(message)) => {
            view.displayed_movie = None;
            Ok(message)
        }
        Err(e) => catalog_failure(e),
    }
}

/// Persist the film currently held by the lookup screen.
pub async fn save(state: &AppState, view: &ViewState) -> Result<String> {
    let Some(raw) = &view.displayed_movie else {
        return Ok(render::NOTHING_TO_SAVE.to_string());
    };

    let record = Record::from_payload(raw).context("Saved lookup result is unreadable")?;
    let title = record.title.clone();
    let written = state.upsert(vec![record]).await?;
    if written == 0 {
        bail!("Record store did not write '{}'", title);
    }

    info!("Saved '{}'", title);
    Ok(render::saved(&title))
}
