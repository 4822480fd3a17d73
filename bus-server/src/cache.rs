//! Caching layer for route search results.
//!
//! The catalog is immutable for the lifetime of the process, so a cached
//! search result never goes stale; the TTL only bounds memory. Keys are
//! exact stop names: lookup is case-sensitive everywhere except the
//! same-stop rejection, so normalizing here would change results.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::planner::{Planner, SearchResult};

/// Cache key for search results: (source stop, destination stop).
type QueryKey = (String, String);

/// Configuration for the result cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Route planner with per-query result caching.
pub struct CachedPlanner {
    planner: Planner,
    results: MokaCache<QueryKey, Arc<SearchResult>>,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(planner: Planner, config: &CacheConfig) -> Self {
        let results = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { planner, results }
    }

    /// Find routes, serving repeated queries from the cache.
    pub async fn find_routes(&self, source: &str, destination: &str) -> Arc<SearchResult> {
        let key = (source.to_string(), destination.to_string());

        if let Some(hit) = self.results.get(&key).await {
            return hit;
        }

        let result = Arc::new(self.planner.find_routes(source, destination));
        self.results.insert(key, result.clone()).await;
        result
    }

    /// Returns the wrapped planner.
    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Returns the number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.results.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.results.invalidate_all();
    }
}
