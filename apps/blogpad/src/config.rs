//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use blogpad_core::archive::DEFAULT_SLOT;

const DEFAULT_DATA_DIR: &str = ".blogpad";

/// Where posts are kept between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON file per key under the data directory.
    File,
    /// Nothing survives the session.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend `{other}`")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub data_dir: PathBuf,
    pub slot: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match lookup("BLOGPAD_STORAGE") {
            Some(value) => value.parse().unwrap_or_else(|e: String| {
                tracing::warn!("{e}, falling back to file storage");
                StorageBackend::File
            }),
            None => StorageBackend::File,
        };

        Self {
            storage,
            data_dir: lookup("BLOGPAD_DATA_DIR")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            slot: lookup("BLOGPAD_SLOT")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SLOT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from(".blogpad"));
        assert_eq!(config.slot, "blogPosts");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BLOGPAD_STORAGE", "Memory"),
            ("BLOGPAD_DATA_DIR", "/tmp/profile"),
            ("BLOGPAD_SLOT", "drafts"),
        ]);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/profile"));
        assert_eq!(config.slot, "drafts");
    }

    #[test]
    fn test_unknown_backend_falls_back_to_file() {
        assert_eq!(config(&[("BLOGPAD_STORAGE", "s3")]).storage, StorageBackend::File);
    }
}
