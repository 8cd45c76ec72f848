//! In-memory key-value store - used when nothing should outlive the session.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogpad_core::ports::{KeyValueStore, StorageError};

/// Key-value store backed by a HashMap behind an async RwLock.
///
/// Note: Data is lost on process exit.
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("blogPosts", "[]").await.unwrap();
        assert_eq!(kv.get("blogPosts").await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("k", "old").await.unwrap();
        kv.set("k", "new").await.unwrap();
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("k", "v").await.unwrap();
        assert_eq!(kv.get("other").await.unwrap(), None);
    }
}
