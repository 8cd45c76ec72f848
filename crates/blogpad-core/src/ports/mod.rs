//! Ports - trait definitions for external dependencies.
//! Infrastructure and front ends implement these.

mod key_value;
mod surface;

pub use key_value::{KeyValueStore, StorageError};
pub use surface::Surface;
