//! Domain-level error types.

use thiserror::Error;

pub use crate::ports::StorageError;

/// Post store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to serialize posts: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to persist posts: {0}")]
    Storage(#[from] StorageError),

    #[error("No post ids left to assign")]
    IdsExhausted,
}

/// A submitted post is missing required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields (Title, Author, Content) to create/update a post.")]
pub struct ValidationError {
    /// Names of the fields that were empty after trimming.
    pub missing: Vec<&'static str>,
}

/// Form submission failures.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
