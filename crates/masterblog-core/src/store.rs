//! Post store - validated CRUD over the persisted post collection.
//!
//! Every operation loads the collection fresh from storage. Mutations run the
//! whole load -> mutate -> save cycle under one async mutex, so two requests
//! in the same process can never overwrite each other's changes.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::domain::collection::{find, find_mut, is_duplicate_title, max_id, next_id};
use crate::domain::{Post, PostDraft};
use crate::error::{StorageError, StorageWarning, StoreError, ValidationError};
use crate::ports::PostStorage;

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Storage order, oldest post first.
    #[default]
    Oldest,
    /// Highest id first.
    Newest,
}

/// A successful result plus any non-fatal storage conditions hit on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    pub warnings: Vec<StorageWarning>,
}

impl<T> Outcome<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// The post store. Construct one per storage location and share it.
///
/// New ids are one past the highest stored id, and never below the highest
/// id this store has already handed out or deleted. That mark lives in memory
/// only: the file holds nothing but the posts, so after a restart the id of a
/// deleted newest post can be allocated again.
pub struct PostStore {
    storage: Arc<dyn PostStorage>,
    /// Guards the mutation cycle and holds the id high-water mark.
    write_lock: Mutex<u64>,
}

impl PostStore {
    pub fn new(storage: Arc<dyn PostStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(0),
        }
    }

    /// Where the posts are stored, for logs and health output.
    pub fn location(&self) -> String {
        self.storage.describe()
    }

    /// Load the collection, substituting an empty one if the stored data
    /// cannot be parsed. Storage that cannot be reached at all is an error, so
    /// a mutation never overwrites posts it failed to read.
    pub async fn load(&self) -> Result<Outcome<Vec<Post>>, StoreError> {
        match self.storage.load().await {
            Ok(posts) => Ok(Outcome::clean(posts)),
            Err(StorageError::Unreadable(reason)) => {
                tracing::warn!(
                    location = %self.storage.describe(),
                    error = %reason,
                    "Post storage unreadable, using empty collection"
                );
                Ok(Outcome {
                    value: Vec::new(),
                    warnings: vec![StorageWarning::Unreadable],
                })
            }
            Err(e) => {
                tracing::error!(
                    location = %self.storage.describe(),
                    error = %e,
                    "Failed to read posts"
                );
                Err(e.into())
            }
        }
    }

    /// Persist the whole collection. A failure is recorded in `warnings`
    /// rather than returned; the caller's copy stays authoritative.
    pub async fn save(&self, posts: &[Post], warnings: &mut Vec<StorageWarning>) {
        if let Err(e) = self.storage.save(posts).await {
            tracing::error!(
                location = %self.storage.describe(),
                error = %e,
                "Failed to save posts"
            );
            warnings.push(StorageWarning::WriteFailed);
        }
    }

    pub async fn list(&self, order: SortOrder) -> Result<Outcome<Vec<Post>>, StoreError> {
        let mut outcome = self.load().await?;
        if order == SortOrder::Newest {
            outcome.value.sort_by(|a, b| b.id.cmp(&a.id));
        }
        Ok(outcome)
    }

    pub async fn get(&self, id: u64) -> Result<Outcome<Post>, StoreError> {
        let outcome = self.load().await?;
        let post = find(&outcome.value, id)
            .cloned()
            .ok_or(StoreError::NotFound { id })?;

        Ok(Outcome {
            value: post,
            warnings: outcome.warnings,
        })
    }

    pub async fn create(
        &self,
        title: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Outcome<Post>, StoreError> {
        let mut last_id = self.write_lock.lock().await;
        let Outcome {
            value: mut posts,
            mut warnings,
        } = self.load().await?;

        let draft = PostDraft::parse(title, content, author)?;
        if is_duplicate_title(&posts, &draft.title, None) {
            return Err(vec![ValidationError::DuplicateTitle].into());
        }

        let id = next_id(&posts)
            .zip(last_id.checked_add(1))
            .map(|(next, above_mark)| next.max(above_mark))
            .ok_or(StoreError::IdsExhausted)?;
        *last_id = id;

        let post = Post::new(id, draft);
        posts.push(post.clone());
        self.save(&posts, &mut warnings).await;

        tracing::info!(post_id = id, "Post created");
        Ok(Outcome {
            value: post,
            warnings,
        })
    }

    pub async fn update(
        &self,
        id: u64,
        title: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Outcome<Post>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let Outcome {
            value: mut posts,
            mut warnings,
        } = self.load().await?;

        if find(&posts, id).is_none() {
            return Err(StoreError::NotFound { id });
        }

        let draft = PostDraft::parse(title, content, author)?;
        if is_duplicate_title(&posts, &draft.title, Some(id)) {
            return Err(vec![ValidationError::DuplicateTitle].into());
        }

        let post = find_mut(&mut posts, id).ok_or(StoreError::NotFound { id })?;
        post.apply(draft);
        let updated = post.clone();
        self.save(&posts, &mut warnings).await;

        tracing::info!(post_id = id, "Post updated");
        Ok(Outcome {
            value: updated,
            warnings,
        })
    }

    /// Remove a post, returning it.
    pub async fn delete(&self, id: u64) -> Result<Outcome<Post>, StoreError> {
        let mut last_id = self.write_lock.lock().await;
        let Outcome {
            value: mut posts,
            mut warnings,
        } = self.load().await?;

        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })?;

        // Remember the id before it leaves the collection.
        if let Some(max) = max_id(&posts) {
            *last_id = (*last_id).max(max);
        }

        let removed = posts.remove(index);
        self.save(&posts, &mut warnings).await;

        tracing::info!(post_id = id, "Post deleted");
        Ok(Outcome {
            value: removed,
            warnings,
        })
    }

    pub async fn like(&self, id: u64) -> Result<Outcome<Post>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let Outcome {
            value: mut posts,
            mut warnings,
        } = self.load().await?;

        let post = find_mut(&mut posts, id).ok_or(StoreError::NotFound { id })?;
        post.like();
        let liked = post.clone();
        self.save(&posts, &mut warnings).await;

        tracing::debug!(post_id = id, likes = liked.likes, "Post liked");
        Ok(Outcome {
            value: liked,
            warnings,
        })
    }
}
