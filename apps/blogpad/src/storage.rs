//! Storage backend selection.

use std::sync::Arc;

use blogpad_core::ports::KeyValueStore;
use blogpad_infra::InMemoryKeyValueStore;

#[cfg(feature = "file")]
use blogpad_infra::FileKeyValueStore;

use crate::config::{AppConfig, StorageBackend};

/// Build the key-value store the configuration asks for.
pub fn open(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage, posts are discarded on exit");
            Arc::new(InMemoryKeyValueStore::new())
        }
        StorageBackend::File => open_file(config),
    }
}

#[cfg(feature = "file")]
fn open_file(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    tracing::info!(dir = %config.data_dir.display(), "Using file storage");
    Arc::new(FileKeyValueStore::new(&config.data_dir))
}

#[cfg(not(feature = "file"))]
fn open_file(_config: &AppConfig) -> Arc<dyn KeyValueStore> {
    tracing::warn!("Built without the file feature - using in-memory storage");
    Arc::new(InMemoryKeyValueStore::new())
}
