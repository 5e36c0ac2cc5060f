use anyhow::Result;
use moviedex_core::{filter_by_actor, SearchTerm};
use tracing::debug;

use crate::render;
use crate::state::AppState;
use crate::view_state::ViewState;

/// Show every stored film featuring `name`.
pub async fn search_actors(state: &AppState, view: &mut ViewState, name: &str) -> Result<String> {
    let text = match SearchTerm::parse(name) {
        Ok(term) => {
            let records = state.fetch_all().await?;
            let total = records.len();
            let matches = filter_by_actor(records, &term);
            debug!("'{}' matched {} of {} stored movies", term, matches.len(), total);
            render::actor_matches(&matches)
        }
        Err(empty) => empty.to_string(),
    };

    view.actor_results = Some(text.clone());
    Ok(text)
}
