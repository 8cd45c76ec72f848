use async_trait::async_trait;

/// Profile-scoped key-value persistence (a browser profile's local storage,
/// a data directory, or plain memory).
///
/// `set` must replace the whole value or fail; readers never observe a
/// partially written value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key-value operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation failed: {0}")]
    Operation(String),
}
