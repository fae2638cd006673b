//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Where posts are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// One JSON file on disk.
    File(PathBuf),
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match var("STORAGE").map(|s| s.to_lowercase()).as_deref() {
            Some("memory") => StorageConfig::Memory,
            _ => StorageConfig::File(
                var("POSTS_FILE")
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| "data/posts.json".to_string())
                    .into(),
            ),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(5003),
            storage,
        }
    }
}
