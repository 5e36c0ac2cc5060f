//! Movie records and the search values that flow around them.
//!
//! A [`Record`] is one film's catalog metadata, keyed by title. It is built
//! either from a catalog lookup payload or literally (seed data), and is the
//! unit the [`RecordStore`](crate::store::RecordStore) persists.

mod term;
mod types;

pub use term::{EmptySearchTerm, SearchTerm};
pub use types::*;
