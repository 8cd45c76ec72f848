//! # Blogpad Core
//!
//! The domain layer of Blogpad: the post entity, the persistence port, and the
//! store, renderer and form controller that sit on top of it.
//! Storage backends live in `blogpad-infra`; front ends implement [`ports::Surface`].

pub mod archive;
pub mod blog;
pub mod domain;
pub mod error;
pub mod form;
pub mod ports;
pub mod seed;
pub mod store;
pub mod view;

pub use archive::PostArchive;
pub use blog::{Blog, SearchKey};
pub use error::{FormError, StorageError, StoreError, ValidationError};
pub use form::{FormController, FormFields, FormMode};
pub use store::PostStore;
