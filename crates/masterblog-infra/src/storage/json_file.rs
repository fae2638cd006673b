//! JSON file storage - the whole collection as one array in one file.
//!
//! Writes go to a sibling temp file which is then renamed over the target,
//! so a concurrent reader sees either the old or the new array, never a
//! partial one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use masterblog_core::domain::Post;
use masterblog_core::error::StorageError;
use masterblog_core::ports::PostStorage;

/// Post storage backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePostStorage {
    path: PathBuf,
}

impl JsonFilePostStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "posts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write_temp(&self, temp: &Path, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(temp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl PostStorage for JsonFilePostStorage {
    async fn load(&self) -> Result<Vec<Post>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Posts file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Posts file is malformed");
            StorageError::Unreadable(e.to_string())
        })
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StorageError> {
        let bytes =
            serde_json::to_vec_pretty(posts).map_err(|e| StorageError::Io(e.to_string()))?;
        let temp = self.temp_path();

        if let Err(e) = self.write_temp(&temp, &bytes).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StorageError::Io(e.to_string()));
        }

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StorageError::Io(e.to_string()));
        }

        tracing::debug!(path = %self.path.display(), count = posts.len(), "Posts saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
