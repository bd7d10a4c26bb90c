//! Mock test persistence: the storage collaborator behind the mock test
//! endpoints. Generation never depends on it for correctness: a failed save is
//! logged by the caller and the test is still returned.
//!
//! `AppState` holds an `Arc<dyn MockTestStore>`. The default backend keeps
//! tests in process memory.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::mock_test::MockTestRecord;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait MockTestStore: Send + Sync {
    async fn save(&self, record: MockTestRecord) -> Result<()>;
    async fn get(&self, test_id: &str) -> Result<Option<MockTestRecord>>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryMockTestStore {
    tests: RwLock<HashMap<String, MockTestRecord>>,
}

impl InMemoryMockTestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MockTestStore for InMemoryMockTestStore {
    async fn save(&self, record: MockTestRecord) -> Result<()> {
        let id = record.test.test_id.clone();
        self.tests.write().await.insert(id.clone(), record);
        debug!("Stored mock test {id}");
        Ok(())
    }

    async fn get(&self, test_id: &str) -> Result<Option<MockTestRecord>> {
        Ok(self.tests.read().await.get(test_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mock_test::{MockTest, MockTestQuestion};

    fn record(id: &str) -> MockTestRecord {
        MockTestRecord {
            test: MockTest {
                test_id: id.to_string(),
                questions: vec![MockTestQuestion {
                    question: "What is ownership?".into(),
                    answer: "Each value has one owner.".into(),
                }],
                user_id: None,
                created_at: "2026-01-01T00:00:00+00:00".into(),
            },
            skills: "Rust".into(),
            expertise: "Beginner".into(),
            topic: None,
        }
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let store = InMemoryMockTestStore::new();
        store.save(record("test_1")).await.unwrap();
        let found = store.get("test_1").await.unwrap().unwrap();
        assert_eq!(found.test.questions.len(), 1);
        assert_eq!(found.skills, "Rust");
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        let store = InMemoryMockTestStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }
}
