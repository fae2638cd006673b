use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StorageError;

/// Storage trait - abstraction over where the post collection lives.
///
/// Implementations read and write the whole collection at once.
#[async_trait]
pub trait PostStorage: Send + Sync {
    /// Load the full collection. Missing storage is an empty collection,
    /// not an error.
    async fn load(&self) -> Result<Vec<Post>, StorageError>;

    /// Replace the stored collection with `posts`.
    async fn save(&self, posts: &[Post]) -> Result<(), StorageError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}
