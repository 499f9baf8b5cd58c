use crate::{Error, Result};
use std::path::PathBuf;
use tracing::warn;

/// Which Cache Store backs the current account and other client state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheBackend {
    /// Process-lifetime store, the session storage equivalent.
    Memory,
    /// On-disk store under the data directory, the local storage equivalent.
    Sled(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub cache: CacheBackend,
}

impl Config {
    const DEFAULT_API_URL: &str = "http://localhost:3333";
    const DEFAULT_DATA_DIR: &str = "./data";
    const DEFAULT_CACHE: &str = "sled";
    const CACHE_FILE: &str = "cache.sled";

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("LIBRARY_API_URL").unwrap_or_else(|| {
            warn!(
                "LIBRARY_API_URL not set, using default {}",
                Self::DEFAULT_API_URL
            );
            Self::DEFAULT_API_URL.to_string()
        });
        let data_dir =
            lookup("LIBRARY_DATA_DIR").unwrap_or_else(|| Self::DEFAULT_DATA_DIR.to_string());
        let cache = match lookup("LIBRARY_CACHE")
            .unwrap_or_else(|| Self::DEFAULT_CACHE.to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => CacheBackend::Memory,
            "sled" => CacheBackend::Sled(PathBuf::from(data_dir).join(Self::CACHE_FILE)),
            other => {
                return Err(Error::Config(format!("unknown cache backend '{other}'")));
            }
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// Absolute URL for an API path such as `/users`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url, "http://localhost:3333");
        assert_eq!(
            config.cache,
            CacheBackend::Sled(PathBuf::from("./data").join("cache.sled"))
        );
    }

    #[test]
    fn test_memory_backend_and_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("LIBRARY_API_URL", "https://api.example.org/"),
            ("LIBRARY_CACHE", "Memory"),
        ]))
        .unwrap();
        assert_eq!(config.cache, CacheBackend::Memory);
        assert_eq!(config.api_url("/users"), "https://api.example.org/users");
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("LIBRARY_CACHE", "redis")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
