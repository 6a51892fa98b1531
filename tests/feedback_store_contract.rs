//! Contract tests for the in-memory feedback store.
//!
//! The in-memory store must honor the same contract as the PostgreSQL
//! store: append-only, unique monotonically increasing ids, stable read
//! order, stats consistent with the record set.

use std::collections::HashSet;
use std::sync::Arc;

use feedback_collector::adapters::memory::InMemoryFeedbackStore;
use feedback_collector::domain::feedback::{NewFeedback, SentimentClassifier};
use feedback_collector::ports::FeedbackStore;

fn submission(name: Option<&str>, body: &str, category: &str) -> NewFeedback {
    NewFeedback::new(
        name,
        "app",
        body,
        category,
        &SentimentClassifier::default(),
    )
}

#[tokio::test]
async fn inserted_record_appears_verbatim_in_list_all() {
    let store = InMemoryFeedbackStore::new();

    let inserted = store
        .insert(submission(Some("Sam"), "works great", "ui"))
        .await
        .unwrap();

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], inserted);
    assert_eq!(records[0].name(), "Sam");
    assert_eq!(records[0].feedback(), "works great");
}

#[tokio::test]
async fn list_all_order_is_stable_across_reads() {
    let store = InMemoryFeedbackStore::new();
    for i in 0..5 {
        store
            .insert(submission(None, &format!("note {}", i), "misc"))
            .await
            .unwrap();
    }

    let first = store.list_all().await.unwrap();
    let second = store.list_all().await.unwrap();
    assert_eq!(first, second);

    let ids: Vec<i64> = first.iter().map(|r| r.id()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn stats_total_equals_list_all_len() {
    let store = InMemoryFeedbackStore::new();
    for body in ["works great", "crash on login", "just okay", "love it"] {
        store
            .insert(submission(Some("Sam"), body, "general"))
            .await
            .unwrap();
    }

    let records = store.list_all().await.unwrap();
    let stats = store.stats().await.unwrap();

    assert_eq!(stats.total, records.len() as u64);
    assert_eq!(stats.total, stats.by_sentiment.values().sum::<u64>());
    assert_eq!(stats.total, stats.by_category.values().sum::<u64>());
}

#[tokio::test]
async fn concurrent_inserts_yield_distinct_ids_and_all_records() {
    const N: usize = 32;

    let store = Arc::new(InMemoryFeedbackStore::new());

    let mut tasks = Vec::with_capacity(N);
    for i in 0..N {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .insert(submission(Some("Sam"), &format!("note {}", i), "misc"))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        let record = task.await.unwrap();
        assert!(ids.insert(record.id()), "duplicate id {}", record.id());
    }

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), N);
    let listed_ids: HashSet<i64> = records.iter().map(|r| r.id()).collect();
    assert_eq!(listed_ids, ids);
}
