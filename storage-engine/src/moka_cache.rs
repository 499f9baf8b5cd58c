use async_trait::async_trait;
use library::ports::CacheRepository;
use moka::future::Cache;
use shared::Result;
use std::fmt::Debug;

/// Moka-based in-memory Cache Store
/// Lives as long as the process, the session storage equivalent. Built without
/// capacity bound or TTL so entries are never evicted behind the caller's back.
#[derive(Clone)]
pub struct MokaCacheStore {
    cache: Cache<String, String>,
}

impl MokaCacheStore {
    pub fn new(name: &str) -> Self {
        Self {
            cache: Cache::builder().name(name).build(),
        }
    }
}

impl Default for MokaCacheStore {
    fn default() -> Self {
        Self::new("library-cache")
    }
}

#[async_trait]
impl CacheRepository for MokaCacheStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key).await)
    }
}

impl Debug for MokaCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheStore")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_moka_store_set_and_get() {
        let store = MokaCacheStore::default();

        store.set("accessToken", "at1").await.unwrap();

        assert_eq!(
            store.get("accessToken").await.unwrap(),
            Some("at1".to_string())
        );
    }

    #[tokio::test]
    async fn test_moka_store_miss_is_none() {
        let store = MokaCacheStore::default();

        assert_eq!(store.get("never-set").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_moka_store_overwrite() {
        let store = MokaCacheStore::default();

        store.set("key", "value1").await.unwrap();
        store.set("key", "value2").await.unwrap();

        // Last write wins
        assert_eq!(store.get("key").await.unwrap(), Some("value2".to_string()));
    }

    #[tokio::test]
    async fn test_moka_store_empty_strings() {
        let store = MokaCacheStore::default();

        store.set("", "").await.unwrap();

        assert_eq!(store.get("").await.unwrap(), Some(String::new()));
    }

    #[tokio::test]
    async fn test_moka_store_concurrent_writers() {
        let store = Arc::new(MokaCacheStore::default());

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.set("shared", &format!("value{i}")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // No ordering is promised, only that one of the writes survived
        let value = store.get("shared").await.unwrap().unwrap();
        assert!(value.starts_with("value"));
    }
}
