//! Application state - shared across all handlers.

use std::sync::Arc;

use masterblog_core::PostStore;
use masterblog_core::ports::PostStorage;
use masterblog_infra::storage::{InMemoryPostStorage, JsonFilePostStorage};

use crate::config::StorageConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
}

impl AppState {
    /// Build the application state with the configured storage.
    pub fn new(storage: &StorageConfig) -> Self {
        let storage: Arc<dyn PostStorage> = match storage {
            StorageConfig::File(path) => {
                tracing::info!(path = %path.display(), "Using JSON file post storage");
                Arc::new(JsonFilePostStorage::new(path.clone()))
            }
            StorageConfig::Memory => {
                tracing::warn!("STORAGE=memory - posts will not survive a restart");
                Arc::new(InMemoryPostStorage::new())
            }
        };

        Self::with_storage(storage)
    }

    pub fn with_storage(storage: Arc<dyn PostStorage>) -> Self {
        Self {
            posts: Arc::new(PostStore::new(storage)),
        }
    }
}
