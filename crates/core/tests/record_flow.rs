//! Retrieval-and-persistence integration tests.
//!
//! These tests drive the catalog client with canned bodies and persist into
//! an on-disk store:
//! - Lookup, then save the retained raw payload without a second request
//! - Seeding followed by actor search
//! - Substring search page mapping

use std::collections::HashSet;

use tempfile::TempDir;

use moviedex_core::{
    filter_by_actor, seed_records,
    testing::{fixtures, MockTransport},
    CatalogError, MovieCatalog, OmdbClient, Record, RecordStore, SearchTerm, SqliteRecordStore,
};

/// Test helper wiring a mock-backed client to a temporary database.
struct TestHarness {
    client: OmdbClient<MockTransport>,
    transport: MockTransport,
    store: SqliteRecordStore,
    _temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = SqliteRecordStore::new(&temp_dir.path().join("movies.db"))
            .expect("Failed to create record store");
        let transport = MockTransport::new();
        let client =
            OmdbClient::new("test-key", transport.clone()).expect("Failed to create client");

        Self {
            client,
            transport,
            store,
            _temp_dir: temp_dir,
        }
    }

    fn titles_matching(&self, actor: &str) -> HashSet<String> {
        let term = SearchTerm::parse(actor).expect("non-empty term");
        filter_by_actor(self.store.fetch_all().unwrap(), &term)
            .into_iter()
            .map(|r| r.title)
            .collect()
    }
}

#[tokio::test]
async fn test_lookup_then_save_from_raw_result() {
    let harness = TestHarness::new();
    let record = fixtures::record("Heat", "Al Pacino, Robert De Niro");
    harness
        .transport
        .push_json(fixtures::lookup_payload(&record))
        .await;

    let fetched = harness.client.fetch_by_title("heat").await.unwrap();
    assert_eq!(fetched, record);

    // Persist from the retained payload, no second request
    let raw = harness.client.last_raw_result().expect("raw result retained");
    let from_raw = Record::from_payload(&raw).unwrap();
    harness.store.upsert(&[from_raw]).unwrap();

    assert_eq!(harness.transport.request_count().await, 1);
    assert_eq!(harness.store.fetch_all().unwrap(), vec![record]);
}

#[tokio::test]
async fn test_lookup_overwrites_seeded_record() {
    let harness = TestHarness::new();
    harness.store.upsert(&seed_records()).unwrap();

    let mut updated = seed_records()
        .into_iter()
        .find(|r| r.title == "Inception")
        .unwrap();
    updated.rated = "PG-13 (re-rated)".to_string();
    updated.actors = "Leonardo DiCaprio, Tom Hardy".to_string();
    harness
        .transport
        .push_json(fixtures::lookup_payload(&updated))
        .await;

    let fetched = harness.client.fetch_by_title("Inception").await.unwrap();
    harness.store.upsert(&[fetched]).unwrap();

    let all = harness.store.fetch_all().unwrap();
    assert_eq!(all.len(), 5);
    let stored: Vec<&Record> = all.iter().filter(|r| r.title == "Inception").collect();
    assert_eq!(stored, vec![&updated]);
}

#[tokio::test]
async fn test_seeded_actor_search() {
    let harness = TestHarness::new();
    harness.store.upsert(&seed_records()).unwrap();
    // Seeding twice changes nothing
    harness.store.upsert(&seed_records()).unwrap();
    assert_eq!(harness.store.fetch_all().unwrap().len(), 5);

    let expected: HashSet<String> = ["The Matrix".to_string()].into_iter().collect();
    assert_eq!(harness.titles_matching("reeves"), expected);
    assert_eq!(harness.titles_matching("KEANU"), expected);

    let anne: HashSet<String> = ["The Matrix".to_string()].into_iter().collect();
    assert_eq!(harness.titles_matching("anne"), anne);

    let peter = harness.titles_matching("peter");
    assert!(peter.contains("Batman: The Dark Knight Returns, Part 1"));
    assert_eq!(peter.len(), 1);

    assert!(harness.titles_matching("z").is_empty());
}

#[tokio::test]
async fn test_not_found_leaves_store_and_raw_result_untouched() {
    let harness = TestHarness::new();
    harness
        .transport
        .push_json(fixtures::failure_payload("Movie not found!"))
        .await;

    let result = harness.client.fetch_by_title("Not A Film").await;
    assert!(matches!(result, Err(CatalogError::NotFound(ref m)) if m == "Movie not found!"));
    assert!(harness.client.last_raw_result().is_none());
    assert!(harness.store.fetch_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_substring_search_page() {
    let harness = TestHarness::new();
    harness
        .transport
        .push_json(fixtures::search_payload(&["A", "B"], "2"))
        .await;

    let page = harness
        .client
        .search_by_title_substring("a")
        .await
        .unwrap();

    assert_eq!(page.titles(), vec!["A", "B"]);
    assert_eq!(page.total_results, 2);
    assert_eq!(page.shown(), 2);

    let requests = harness.transport.recorded_requests().await;
    assert_eq!(requests[0].param("s"), Some("*a*"));
}
