//! Screens of the application.
//!
//! Each screen performs at most one unit of I/O per invocation, waits for it,
//! and only then produces the text to display. Every outcome leaves the
//! screen idle; nothing is retried.

mod actors;
mod lookup;
mod seed;
mod substring;

pub use actors::search_actors;
pub use lookup::{lookup, save};
pub use seed::seed;
pub use substring::search_titles;

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use moviedex_core::{CatalogError, Record};
use tracing::{error, warn};

use crate::render;
use crate::view_state::ViewState;

/// Screens whose last view can be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Title lookup
    Lookup,
    /// Title substring search
    Search,
    /// Actor search
    Actors,
}

/// Re-render a screen's last view from saved state.
pub fn show(view: &ViewState, screen: Screen) -> Result<String> {
    match screen {
        Screen::Lookup => match &view.displayed_movie {
            Some(raw) => {
                let record = Record::from_payload(raw)
                    .context("Saved lookup result is unreadable")?;
                Ok(render::lookup_result(&record))
            }
            None => Ok(String::new()),
        },
        Screen::Search => Ok(view.substring_results.clone().unwrap_or_default()),
        Screen::Actors => Ok(view.actor_results.clone().unwrap_or_default()),
    }
}

/// Text shown in place of a result when the catalog call fails.
fn catalog_failure(err: CatalogError) -> Result<String> {
    match err {
        CatalogError::EmptyInput => Ok(CatalogError::EmptyInput.to_string()),
        CatalogError::NotFound(message) => Ok(message),
        CatalogError::Network(e) => {
            warn!("Catalog request failed: {}", e);
            Ok(render::NETWORK_FAILURE.to_string())
        }
        CatalogError::MalformedResponse(detail) => {
            error!("Catalog response did not match the expected contract: {}", detail);
            Ok(render::MALFORMED_RESPONSE.to_string())
        }
        CatalogError::NotConfigured(detail) => Err(anyhow!("Catalog not configured: {}", detail)),
    }
}
