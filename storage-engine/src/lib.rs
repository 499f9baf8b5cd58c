// Cache Store adapters behind `library::ports::CacheRepository`
pub mod moka_cache;
pub mod sled_cache;

pub use moka_cache::MokaCacheStore;
pub use sled_cache::SledCacheStore;
