//! Record store - durable movie records keyed by title.
//!
//! Only two operations exist: insert-or-replace and full read. Filtering
//! (e.g. by actor) happens on the caller's side over [`RecordStore::fetch_all`].

mod sqlite;
mod types;

pub use sqlite::{SqliteRecordStore, SCHEMA_VERSION};
pub use types::*;

use crate::record::Record;

/// Trait for record storage.
pub trait RecordStore: Send + Sync {
    /// Insert or replace records by title.
    ///
    /// A record whose title already exists overwrites every stored field
    /// (last write wins, no merge). Duplicate titles are never an error.
    /// Records with an empty title are skipped.
    ///
    /// Returns the number of records written.
    fn upsert(&self, records: &[Record]) -> Result<usize, StoreError>;

    /// Every stored record, in no particular order.
    fn fetch_all(&self) -> Result<Vec<Record>, StoreError>;
}
