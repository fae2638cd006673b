//! # MasterBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `masterblog-core`.
//!
//! - [`JsonFilePostStorage`] - the post collection as one JSON array on disk
//! - [`InMemoryPostStorage`] - ephemeral storage for tests and demos

pub mod storage;

pub use storage::{InMemoryPostStorage, JsonFilePostStorage};
