//! # Blogpad Infrastructure
//!
//! Concrete implementations of the [`KeyValueStore`](blogpad_core::ports::KeyValueStore)
//! port that backs post persistence.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends enabled
//! - `minimal` - In-memory only
//! - `file` - One file per key under a profile directory

pub mod kv;

pub use kv::InMemoryKeyValueStore;

#[cfg(feature = "file")]
pub use kv::FileKeyValueStore;
