//! Key-value store implementations - file-backed and in-memory.

mod memory;

#[cfg(feature = "file")]
mod file;

pub use memory::InMemoryKeyValueStore;

#[cfg(feature = "file")]
pub use file::FileKeyValueStore;
