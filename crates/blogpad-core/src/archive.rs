//! Persistence adapter: the whole post collection as one JSON blob under a
//! single key-value slot.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::Post;
use crate::error::StoreError;
use crate::ports::KeyValueStore;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "blogPosts";

/// Reads and writes the post collection.
#[derive(Clone)]
pub struct PostArchive {
    kv: Arc<dyn KeyValueStore>,
    slot: String,
}

impl PostArchive {
    pub fn new(kv: Arc<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        Self {
            kv,
            slot: slot.into(),
        }
    }

    pub fn with_default_slot(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::new(kv, DEFAULT_SLOT)
    }

    /// Load the stored collection.
    ///
    /// Returns `None` when nothing is stored or the blob can't be read or
    /// parsed. Those cases are logged, never returned as errors.
    pub async fn load(&self) -> Option<Vec<Post>> {
        let blob = match self.kv.get(&self.slot).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!(slot = %self.slot, "No stored posts");
                return None;
            }
            Err(e) => {
                tracing::warn!(slot = %self.slot, error = %e, "Failed to read stored posts");
                return None;
            }
        };

        let posts = match serde_json::from_str::<Vec<Post>>(&blob) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(slot = %self.slot, error = %e, "Stored posts are corrupt, ignoring");
                return None;
            }
        };
        if let Err(reason) = check_records(&posts) {
            tracing::warn!(slot = %self.slot, %reason, "Stored posts are invalid, ignoring");
            return None;
        }

        tracing::debug!(slot = %self.slot, count = posts.len(), "Loaded stored posts");
        Some(posts)
    }

    /// Overwrite the stored collection.
    pub async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(posts)?;
        self.kv.set(&self.slot, &blob).await?;
        tracing::debug!(slot = %self.slot, count = posts.len(), "Saved posts");
        Ok(())
    }
}

/// Ids must be positive and unique; title, author and content non-blank.
fn check_records(posts: &[Post]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if post.id == 0 {
            return Err("post with id 0".to_string());
        }
        if !seen.insert(post.id) {
            return Err(format!("duplicate post id {}", post.id));
        }
        let blank = [&post.title, &post.author, &post.content]
            .iter()
            .any(|field| field.trim().is_empty());
        if blank {
            return Err(format!("post {} has a blank required field", post.id));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Media, PostDraft};
    use crate::ports::StorageError;

    /// Minimal map-backed store for unit tests.
    #[derive(Default)]
    pub(crate) struct MapStore {
        pub(crate) entries: Mutex<HashMap<String, String>>,
        pub(crate) fail_writes: bool,
    }

    impl MapStore {
        pub(crate) fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            store
        }

        pub(crate) fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        pub(crate) fn raw(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl KeyValueStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Operation("disk full".to_string()));
            }
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn posts() -> Vec<Post> {
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        vec![
            Post::new(
                2,
                date,
                PostDraft::new("Second", "Bob", "Body two")
                    .with_media(Media::video("https://example.com/v.mp4")),
            ),
            Post::new(1, date, PostDraft::new("First", "Alice", "Body one")),
        ]
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let archive = PostArchive::with_default_slot(Arc::new(MapStore::default()));
        archive.save(&posts()).await.unwrap();
        assert_eq!(archive.load().await, Some(posts()));
    }

    #[tokio::test]
    async fn test_load_missing_slot() {
        let archive = PostArchive::with_default_slot(Arc::new(MapStore::default()));
        assert_eq!(archive.load().await, None);
    }

    #[tokio::test]
    async fn test_load_corrupt_blob() {
        let kv = Arc::new(MapStore::with(DEFAULT_SLOT, "{not json"));
        let archive = PostArchive::with_default_slot(kv);
        assert_eq!(archive.load().await, None);
    }

    fn record(id: u64, title: &str) -> String {
        format!(
            r#"{{"id":{id},"title":"{title}","author":"A","date":"2025-05-20","content":"C","media":null}}"#
        )
    }

    #[tokio::test]
    async fn test_load_rejects_records_breaking_invariants() {
        let blobs = [
            format!("[{}]", record(0, "Zero")),
            format!("[{},{}]", record(3, "One"), record(3, "Two")),
            format!("[{}]", record(5, "  ")),
        ];
        for blob in blobs {
            let archive = PostArchive::with_default_slot(Arc::new(MapStore::with(DEFAULT_SLOT, &blob)));
            assert_eq!(archive.load().await, None, "accepted {blob}");
        }

        let valid = format!("[{},{}]", record(2, "One"), record(1, "Two"));
        let archive = PostArchive::with_default_slot(Arc::new(MapStore::with(DEFAULT_SLOT, &valid)));
        assert_eq!(archive.load().await.map(|p| p.len()), Some(2));
    }

    #[tokio::test]
    async fn test_load_empty_array_is_data() {
        let kv = Arc::new(MapStore::with(DEFAULT_SLOT, "[]"));
        let archive = PostArchive::with_default_slot(kv);
        assert_eq!(archive.load().await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_reads_browser_shaped_blob() {
        let blob = r#"[{"id":3,"title":"T","author":"A","date":"2025-05-25","content":"C","media":{"type":"video","url":"u"}},
                       {"id":4,"title":"T2","author":"A2","date":"2025-05-26","content":"C2","media":null}]"#;
        let archive = PostArchive::new(Arc::new(MapStore::with("posts", blob)), "posts");
        let loaded = archive.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].media, Some(Media::video("u")));
        assert_eq!(loaded[1].media, None);
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let archive = PostArchive::with_default_slot(Arc::new(MapStore::failing()));
        let err = archive.save(&posts()).await.unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
    }
}
