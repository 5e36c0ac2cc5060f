//! Types for the record store.

use thiserror::Error;

/// Errors for record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unsupported schema version {found} (this build supports up to {supported})")]
    UnsupportedSchema { found: i32, supported: i32 },

    #[error("Internal error: {0}")]
    Internal(String),
}
