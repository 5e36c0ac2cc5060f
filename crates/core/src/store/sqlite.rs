//! SQLite-backed record store implementation.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{params, Connection, Row, TransactionBehavior};
use tracing::{debug, info, warn};

use super::{RecordStore, StoreError};
use crate::record::Record;

/// Schema version written to `PRAGMA user_version`.
///
/// Adding a column is a breaking change and needs a migration path first.
pub const SCHEMA_VERSION: i32 = 1;

/// How long a writer waits for another handle's lock on the same file.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed record store.
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Open (or create) the database file and its table.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        debug!("Opened record store at {:?}", path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: version,
                supported: SCHEMA_VERSION,
            });
        }

        conn.execute_batch(
            r#"
            -- One row per film, keyed by title
            CREATE TABLE IF NOT EXISTS movie (
                title TEXT PRIMARY KEY NOT NULL,
                year TEXT NOT NULL,
                rated TEXT NOT NULL,
                released TEXT NOT NULL,
                runtime TEXT NOT NULL,
                genre TEXT NOT NULL,
                director TEXT NOT NULL,
                writer TEXT NOT NULL,
                actors TEXT NOT NULL,
                plot TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;

        if version < SCHEMA_VERSION {
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Internal("record store lock poisoned".to_string()))
    }

    fn row_to_record(row: &Row) -> rusqlite::Result<Record> {
        Ok(Record {
            title: row.get(0)?,
            year: row.get(1)?,
            rated: row.get(2)?,
            released: row.get(3)?,
            runtime: row.get(4)?,
            genre: row.get(5)?,
            director: row.get(6)?,
            writer: row.get(7)?,
            actors: row.get(8)?,
            plot: row.get(9)?,
        })
    }
}

impl RecordStore for SqliteRecordStore {
    fn upsert(&self, records: &[Record]) -> Result<usize, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut written = 0;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO movie (title, year, rated, released, runtime, genre, director, writer, actors, plot)
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                     ON CONFLICT(title) DO UPDATE SET
                        year = excluded.year,
                        rated = excluded.rated,
                        released = excluded.released,
                        runtime = excluded.runtime,
                        genre = excluded.genre,
                        director = excluded.director,
                        writer = excluded.writer,
                        actors = excluded.actors,
                        plot = excluded.plot",
                )
                .map_err(|e| StoreError::Database(e.to_string()))?;

            for record in records {
                if record.title.trim().is_empty() {
                    warn!("Skipping record with empty title");
                    continue;
                }

                stmt.execute(params![
                    &record.title,
                    &record.year,
                    &record.rated,
                    &record.released,
                    &record.runtime,
                    &record.genre,
                    &record.director,
                    &record.writer,
                    &record.actors,
                    &record.plot,
                ])
                .map_err(|e| StoreError::Database(e.to_string()))?;
                written += 1;
            }
        }

        tx.commit()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        info!("Upserted {} record(s)", written);
        Ok(written)
    }

    fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT title, year, rated, released, runtime, genre, director, writer, actors, plot
                 FROM movie",
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_record)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| StoreError::Database(e.to_string()))?);
        }
        Ok(records)
    }
}
