//! Record and search page types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::CatalogError;

/// One movie's catalog metadata.
///
/// All fields are kept as the catalog renders them ("142 min", "14 Oct 1994").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Record {
    /// Movie title. Unique key within the store.
    pub title: String,
    pub year: String,
    /// Content rating (e.g. "PG-13").
    pub rated: String,
    /// Release date as rendered by the catalog.
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    /// Comma-separated actor names.
    pub actors: String,
    /// Plot summary.
    pub plot: String,
}

/// Title lookup payload as the catalog sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LookupPayload {
    title: String,
    year: String,
    rated: String,
    released: String,
    runtime: String,
    genre: String,
    director: String,
    writer: String,
    actors: String,
    plot: String,
}

impl From<LookupPayload> for Record {
    fn from(p: LookupPayload) -> Self {
        Self {
            title: p.title,
            year: p.year,
            rated: p.rated,
            released: p.released,
            runtime: p.runtime,
            genre: p.genre,
            director: p.director,
            writer: p.writer,
            actors: p.actors,
            plot: p.plot,
        }
    }
}

impl Record {
    /// Map a successful title-lookup payload into a record.
    ///
    /// Every one of the ten fields must be present as a string and the title
    /// must not be blank. Anything else is a [`CatalogError::MalformedResponse`];
    /// no field is ever defaulted.
    pub fn from_payload(payload: &Value) -> Result<Self, CatalogError> {
        let record: Record = LookupPayload::deserialize(payload)
            .map(Record::from)
            .map_err(|e| {
                CatalogError::MalformedResponse(format!("invalid lookup payload: {}", e))
            })?;

        if record.title.trim().is_empty() {
            return Err(CatalogError::MalformedResponse(
                "lookup payload has a blank Title".to_string(),
            ));
        }

        Ok(record)
    }
}

/// One title returned by a substring search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEntry {
    /// 1-based position in the order the catalog returned it.
    pub rank: usize,
    pub title: String,
}

/// A single page of substring search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPage {
    /// Entries in catalog order. Never re-sorted.
    pub entries: Vec<SearchEntry>,
    /// Total number of matches the catalog reports, across all pages.
    pub total_results: u64,
}

impl SearchPage {
    /// Titles in the order the catalog returned them.
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    /// Number of entries actually returned on this page.
    ///
    /// Counted locally; it may be smaller than `total_results`.
    pub fn shown(&self) -> usize {
        self.entries.len()
    }
}
