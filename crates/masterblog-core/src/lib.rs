//! # MasterBlog Core
//!
//! The domain layer of MasterBlog.
//! This crate contains the post model, validation rules and the post store,
//! with storage reached only through the `PostStorage` port.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{StorageError, StorageWarning, StoreError, ValidationError};
pub use store::{Outcome, PostStore, SortOrder};
