//! File-backed key-value store: one JSON file per key under a profile
//! directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use blogpad_core::ports::{KeyValueStore, StorageError};

/// Stores each key at `<root>/<key>.json`.
///
/// Writes land in a temporary sibling first and are renamed into place, so a
/// reader sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.json.tmp"));

        fs::create_dir_all(&self.root).await?;
        fs::write(&tmp, value).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::trace!(path = %path.display(), bytes = value.len(), "Wrote key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKeyValueStore::new(dir.path().join("profile"));

        assert_eq!(kv.get("blogPosts").await.unwrap(), None);
        kv.set("blogPosts", "[1]").await.unwrap();
        kv.set("blogPosts", "[2]").await.unwrap();

        assert_eq!(kv.get("blogPosts").await.unwrap().as_deref(), Some("[2]"));
        let on_disk = std::fs::read_to_string(dir.path().join("profile/blogPosts.json")).unwrap();
        assert_eq!(on_disk, "[2]");
        assert!(!dir.path().join("profile/.blogPosts.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_root_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKeyValueStore::new(dir.path().join("never-created"));
        assert_eq!(kv.get("blogPosts").await.unwrap(), None);
        assert!(!dir.path().join("never-created").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKeyValueStore::new(dir.path());
        for key in ["", "../escape", "a/b", "a.b"] {
            assert!(matches!(
                kv.set(key, "x").await,
                Err(StorageError::InvalidKey(_))
            ));
        }
    }
}
