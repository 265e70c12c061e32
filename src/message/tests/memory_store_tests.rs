//! Unit tests for the in-memory table store adapter.

use crate::message::{
    adapters::memory::InMemoryTableStore,
    ports::table::{TableRecord, TableStore},
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn store() -> InMemoryTableStore {
    InMemoryTableStore::new()
}

fn record(partition: &str, row: &str) -> TableRecord {
    TableRecord::new(partition, row, json!({"row": row}))
}

#[rstest]
fn new_store_is_empty(store: InMemoryTableStore) {
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[rstest]
#[tokio::test]
async fn retrieve_missing_record_returns_none(store: InMemoryTableStore) {
    let found = store.retrieve("p", "r").await.expect("retrieve");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn insert_or_replace_echoes_the_stored_record(store: InMemoryTableStore) {
    let stored = store
        .insert_or_replace(record("p", "r"))
        .await
        .expect("insert");

    assert_eq!(stored, record("p", "r"));
    assert_eq!(store.len(), 1);
}

#[rstest]
#[tokio::test]
async fn insert_or_replace_overwrites_existing_record(store: InMemoryTableStore) {
    store
        .insert_or_replace(record("p", "r"))
        .await
        .expect("first insert");

    let replacement = TableRecord::new("p", "r", json!({"generation": 2}));
    store
        .insert_or_replace(replacement.clone())
        .await
        .expect("replace");

    assert_eq!(store.len(), 1);
    let found = store.retrieve("p", "r").await.expect("retrieve");
    assert_eq!(found, Some(replacement));
}

#[rstest]
#[tokio::test]
async fn delete_removes_the_record(store: InMemoryTableStore) {
    store
        .insert_or_replace(record("p", "r"))
        .await
        .expect("insert");

    store.delete("p", "r").await.expect("delete");

    assert!(store.is_empty());
    let found = store.retrieve("p", "r").await.expect("retrieve");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn delete_of_absent_record_is_not_an_error(store: InMemoryTableStore) {
    store.delete("p", "missing").await.expect("delete");
    assert!(store.is_empty());
}

#[rstest]
#[tokio::test]
async fn prefix_query_returns_only_matching_rows(store: InMemoryTableStore) {
    for row in ["M;a;1", "M;a;2", "M;b;1", "N;a;1"] {
        store
            .insert_or_replace(record("p", row))
            .await
            .expect("insert");
    }

    let matches = store
        .query_row_key_prefix("p", "M;a;")
        .await
        .expect("query");

    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|r| r.row_key.starts_with("M;a;")));
}

#[rstest]
#[tokio::test]
async fn prefix_query_is_scoped_to_the_partition(store: InMemoryTableStore) {
    store
        .insert_or_replace(record("p1", "M;a;1"))
        .await
        .expect("insert");
    store
        .insert_or_replace(record("p2", "M;a;2"))
        .await
        .expect("insert");

    let matches = store
        .query_row_key_prefix("p1", "M;a;")
        .await
        .expect("query");

    assert_eq!(matches.len(), 1);
    assert!(matches.iter().all(|r| r.partition_key == "p1"));
}

#[rstest]
#[tokio::test]
async fn prefix_query_on_empty_partition_returns_empty_vec(store: InMemoryTableStore) {
    let matches = store
        .query_row_key_prefix("p", "M;a;")
        .await
        .expect("query");
    assert!(matches.is_empty());
}
