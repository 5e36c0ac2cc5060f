//! Testing utilities and mock implementations.
//!
//! Lets the catalog client be driven by canned JSON bodies instead of the
//! live service.
//!
//! # Example
//!
//! ```rust,ignore
//! use moviedex_core::testing::{fixtures, MockTransport};
//! use moviedex_core::{MovieCatalog, OmdbClient};
//!
//! let transport = MockTransport::new();
//! transport.push_json(fixtures::failure_payload("Movie not found!")).await;
//!
//! let client = OmdbClient::new("key", transport.clone())?;
//! assert!(client.fetch_by_title("Nope").await.is_err());
//! assert_eq!(transport.request_count().await, 1);
//! ```

mod mock_transport;

pub use mock_transport::{MockTransport, RecordedRequest};

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::record::Record;

    /// Create a record with reasonable defaults for everything but title and actors.
    pub fn record(title: &str, actors: &str) -> Record {
        Record {
            title: title.to_string(),
            year: "1999".to_string(),
            rated: "R".to_string(),
            released: "31 Mar 1999".to_string(),
            runtime: "120 min".to_string(),
            genre: "Drama".to_string(),
            director: "Test Director".to_string(),
            writer: "Test Writer".to_string(),
            actors: actors.to_string(),
            plot: format!("A film called {}.", title),
        }
    }

    /// Successful title lookup payload for `record`.
    pub fn lookup_payload(record: &Record) -> Value {
        json!({
            "Title": record.title,
            "Year": record.year,
            "Rated": record.rated,
            "Released": record.released,
            "Runtime": record.runtime,
            "Genre": record.genre,
            "Director": record.director,
            "Writer": record.writer,
            "Actors": record.actors,
            "Plot": record.plot,
            "Language": "English",
            "imdbID": "tt0000000",
            "Response": "True"
        })
    }

    /// Failure payload with the catalog's error message.
    pub fn failure_payload(message: &str) -> Value {
        json!({
            "Response": "False",
            "Error": message
        })
    }

    /// Successful substring search payload.
    pub fn search_payload(titles: &[&str], total_results: &str) -> Value {
        let search: Vec<Value> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                json!({
                    "Title": title,
                    "Year": "2000",
                    "imdbID": format!("tt{:07}", i),
                    "Type": "movie"
                })
            })
            .collect();

        json!({
            "Search": search,
            "totalResults": total_results,
            "Response": "True"
        })
    }
}
