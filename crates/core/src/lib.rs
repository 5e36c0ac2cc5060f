pub mod actors;
pub mod catalog;
pub mod config;
pub mod record;
pub mod seed;
pub mod store;
pub mod testing;

pub use actors::filter_by_actor;
pub use catalog::{
    CatalogError, CatalogTransport, HttpTransport, MovieCatalog, OmdbClient, TransportError,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    DatabaseConfig, SanitizedConfig, StateConfig,
};
pub use record::{EmptySearchTerm, Record, SearchEntry, SearchPage, SearchTerm};
pub use seed::seed_records;
pub use store::{RecordStore, SqliteRecordStore, StoreError};
