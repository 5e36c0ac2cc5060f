//! Wire types for catalog search responses.

use serde::Deserialize;

use super::CatalogError;
use crate::record::{SearchEntry, SearchPage};

/// Successful substring search payload.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPayload {
    #[serde(rename = "Search")]
    pub search: Vec<SearchItem>,
    /// Numeric total, sent as a string.
    #[serde(rename = "totalResults")]
    pub total_results: String,
}

/// One entry of the `Search` array.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    #[serde(rename = "Title")]
    pub title: String,
}

impl TryFrom<SearchPayload> for SearchPage {
    type Error = CatalogError;

    fn try_from(payload: SearchPayload) -> Result<Self, Self::Error> {
        let total_results = payload.total_results.trim().parse::<u64>().map_err(|_| {
            CatalogError::MalformedResponse(format!(
                "totalResults is not a count: {:?}",
                payload.total_results
            ))
        })?;

        let entries = payload
            .search
            .into_iter()
            .enumerate()
            .map(|(i, item)| SearchEntry {
                rank: i + 1,
                title: item.title,
            })
            .collect();

        Ok(SearchPage {
            entries,
            total_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_payload_conversion_keeps_order() {
        let payload = SearchPayload {
            search: vec![
                SearchItem {
                    title: "Zodiac".to_string(),
                },
                SearchItem {
                    title: "Alien".to_string(),
                },
            ],
            total_results: "312".to_string(),
        };

        let page = SearchPage::try_from(payload).unwrap();
        assert_eq!(page.titles(), vec!["Zodiac", "Alien"]);
        assert_eq!(page.entries[0].rank, 1);
        assert_eq!(page.entries[1].rank, 2);
        assert_eq!(page.total_results, 312);
    }

    #[test]
    fn test_search_payload_bad_total() {
        let payload = SearchPayload {
            search: vec![],
            total_results: "lots".to_string(),
        };

        let result = SearchPage::try_from(payload);
        assert!(matches!(result, Err(CatalogError::MalformedResponse(_))));
    }
}
