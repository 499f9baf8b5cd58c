use async_trait::async_trait;
use library::ports::CacheRepository;
use shared::{Error, Result};
use std::path::Path;
use tracing::debug;

const CACHE_TREE: &str = "cache";

/// Sled-based persistent Cache Store
/// Survives restarts, the local storage equivalent. Values are stored as raw
/// UTF-8 bytes with no expiry.
#[derive(Clone)]
pub struct SledCacheStore {
    tree: sled::Tree,
}

impl SledCacheStore {
    /// Open (or create) the store at `path`
    /// Creates the parent directory if it doesn't exist
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create directory: {}", e)))?;
        }

        // sled holds an exclusive file lock for as long as the database is open
        let db = sled::open(path).map_err(|e| {
            Error::Storage(format!(
                "Failed to open Sled database at {} (is another library process using it?): {}",
                path.display(),
                e
            ))
        })?;
        let tree = db
            .open_tree(CACHE_TREE)
            .map_err(|e| Error::Storage(format!("Failed to open cache tree: {}", e)))?;

        debug!("Opened sled cache store at {}", path.display());
        Ok(Self { tree })
    }
}

#[async_trait]
impl CacheRepository for SledCacheStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.tree
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to write key '{}': {}", key, e)))?;

        self.tree
            .flush_async()
            .await
            .map_err(|e| Error::Storage(format!("Failed to flush cache: {}", e)))?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .tree
            .get(key.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to read key '{}': {}", key, e)))?;

        match value {
            Some(bytes) => {
                let value = String::from_utf8(bytes.to_vec()).map_err(|e| {
                    Error::Storage(format!("Value under '{}' is not UTF-8: {}", key, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}
