//! In-memory post storage - used when no posts file is wanted.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use masterblog_core::domain::Post;
use masterblog_core::error::StorageError;
use masterblog_core::ports::PostStorage;

/// In-memory storage holding the collection behind an async RwLock.
pub struct InMemoryPostStorage {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStorage {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start from an existing collection.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStorage for InMemoryPostStorage {
    async fn load(&self) -> Result<Vec<Post>, StorageError> {
        Ok(self.posts.read().await.clone())
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StorageError> {
        let mut stored = self.posts.write().await;
        *stored = posts.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use masterblog_core::{PostStore, SortOrder};

    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let storage = InMemoryPostStorage::new();
        assert!(storage.load().await.unwrap().is_empty());

        let store = PostStore::new(Arc::new(storage));
        store.create("Hello", "world", None).await.unwrap();

        let posts = store.list(SortOrder::Oldest).await.unwrap();
        assert!(posts.is_clean());
        assert_eq!(posts.value.len(), 1);
        assert_eq!(posts.value[0].title, "Hello");
    }
}
