//! Tests for the in-memory record store

use crate::errors::DomainError;
use crate::repositories::record::{MockRecordStore, RecordStore};

fn seeded_store() -> MockRecordStore {
    let store = MockRecordStore::new();
    store.insert("mm_books", "lang", 1, Some("en"));
    store.insert("mm_books", "lang", 2, Some("fr"));
    store.insert("mm_books", "lang", 3, Some("en"));
    store.insert("mm_books", "lang", 4, None);
    store.insert("mm_books", "lang", 5, Some("de"));
    store
}

#[tokio::test]
async fn test_count_values_by_id_order() {
    let store = seeded_store();

    let counts = store
        .count_values("mm_books", "lang", Some(&[2, 1, 3, 4][..]))
        .await
        .unwrap();

    let flat: Vec<(&str, u64)> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
    assert_eq!(flat, vec![("fr", 1), ("en", 2)]);
}

#[tokio::test]
async fn test_count_values_ignores_duplicate_ids() {
    let store = seeded_store();

    let counts = store
        .count_values("mm_books", "lang", Some(&[1, 1, 1][..]))
        .await
        .unwrap();

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].count, 1);
}

#[tokio::test]
async fn test_count_values_whole_table_sorted_by_value() {
    let store = seeded_store();

    let counts = store.count_values("mm_books", "lang", None).await.unwrap();

    let flat: Vec<(&str, u64)> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
    assert_eq!(flat, vec![("de", 1), ("en", 2), ("fr", 1)]);
}

#[tokio::test]
async fn test_fetch_and_store_values() {
    let store = seeded_store();

    store
        .store_values("mm_books", "lang", &[(2, None), (9, Some("it".to_string()))])
        .await
        .unwrap();

    let values = store.fetch_values("mm_books", "lang", &[1, 2, 9, 42]).await.unwrap();
    assert_eq!(
        values,
        vec![
            (1, Some("en".to_string())),
            (2, None),
            (9, Some("it".to_string())),
        ]
    );
}

#[tokio::test]
async fn test_failure_mode() {
    let store = seeded_store();
    store.set_should_fail(true);

    let result = store.count_values("mm_books", "lang", None).await;
    assert!(matches!(result, Err(DomainError::Storage { .. })));
}
