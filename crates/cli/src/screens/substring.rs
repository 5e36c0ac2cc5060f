use anyhow::Result;

use super::catalog_failure;
use crate::render;
use crate::state::AppState;
use crate::view_state::ViewState;

/// Search the catalog for titles containing `fragment`.
pub async fn search_titles(state: &AppState, view: &mut ViewState, fragment: &str) -> Result<String> {
    let text = match state.catalog().search_by_title_substring(fragment).await {
        Ok(page) => render::search_page(&page),
        Err(e) => catalog_failure(e)?,
    };

    view.substring_results = Some(text.clone());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support;
    use moviedex_core::testing::{fixtures, MockTransport};

    #[tokio::test]
    async fn test_search_renders_page_and_counts() {
        let transport = MockTransport::new();
        let state = test_support::app(&transport);
        transport
            .push_json(fixtures::search_payload(&["Star Wars", "Star Trek"], "4512"))
            .await;

        let mut view = ViewState::default();
        let text = search_titles(&state, &mut view, "star").await.unwrap();

        assert_eq!(
            text,
            "Star Wars\n\nStar Trek\n\n(Results shown: 2, Total results: 4512)\n"
        );
        assert_eq!(view.substring_results.as_deref(), Some(text.as_str()));
    }

    #[tokio::test]
    async fn test_search_not_found_shows_service_message() {
        let transport = MockTransport::new();
        let state = test_support::app(&transport);
        transport
            .push_json(fixtures::failure_payload("Movie not found!"))
            .await;

        let mut view = ViewState::default();
        let text = search_titles(&state, &mut view, "qqqq").await.unwrap();

        assert_eq!(text, "Movie not found!");
        assert_eq!(view.substring_results.as_deref(), Some("Movie not found!"));
    }
}
