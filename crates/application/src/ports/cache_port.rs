//! Cache port definition
//!
//! Defines the interface for the shared, process-wide cache that sits in
//! front of the forecast provider.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::error::ApplicationError;

/// Exclusive hold on one cache key
///
/// Obtained from [`CachePort::lock`]; the key is released when the guard
/// is dropped.
#[derive(Debug)]
pub struct CacheLock {
    _guard: OwnedMutexGuard<()>,
}

impl CacheLock {
    /// Wrap an acquired per-key mutex guard
    #[must_use]
    pub const fn new(guard: OwnedMutexGuard<()>) -> Self {
        Self { _guard: guard }
    }
}

/// Cache port for storing and retrieving cached values
///
/// Implementations must be thread-safe. Values are stored as raw bytes -
/// callers handle serialization. Reads never take the per-key lock; writers
/// that want at-most-one concurrent producer per key hold [`CacheLock`]
/// while producing and storing the value.
#[async_trait]
pub trait CachePort: Send + Sync + std::fmt::Debug {
    /// Get a cached value by key
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Set a cached value with a time-to-live
    ///
    /// If the key already exists, its value and TTL are replaced.
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), ApplicationError>;

    /// Invalidate (delete) a single cache entry
    async fn invalidate(&self, key: &str) -> Result<(), ApplicationError>;

    /// Check if a live entry exists for the key (without reading it)
    async fn exists(&self, key: &str) -> Result<bool, ApplicationError>;

    /// Acquire the exclusive lock scoped to `key`
    ///
    /// Waits while another holder has the same key locked. Locks on
    /// different keys never contend.
    async fn lock(&self, key: &str) -> CacheLock;

    /// Get cache statistics (hits, misses, size)
    fn stats(&self) -> CacheStats;
}

/// Extension trait for typed cache operations
///
/// Provides convenient typed get/set methods on top of the raw byte interface.
#[async_trait]
pub trait CachePortExt: CachePort {
    /// Get a typed value from cache
    async fn get<T>(&self, key: &str) -> Result<Option<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.get_bytes(key).await? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes).map_err(|e| {
                    ApplicationError::Internal(format!("Cache deserialization error: {e}"))
                })?;
                Ok(Some(value))
            },
            None => Ok(None),
        }
    }

    /// Set a typed value in cache
    async fn set<T>(&self, key: &str, value: &T, ttl: Duration) -> Result<(), ApplicationError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| ApplicationError::Internal(format!("Cache serialization error: {e}")))?;
        self.set_bytes(key, bytes, ttl).await
    }
}

// Blanket implementation for all CachePort implementors
impl<T: CachePort + ?Sized> CachePortExt for T {}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries
    pub entries: u64,
}

impl CacheStats {
    /// Calculate the hit rate as a fraction (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            // Precision loss is acceptable for statistics display
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use parking_lot::Mutex;

    use super::*;

    /// Minimal in-memory cache; ignores TTLs and uses one lock for every key
    #[derive(Debug, Default)]
    struct MapCache {
        entries: Mutex<HashMap<String, Vec<u8>>>,
        gate: Arc<tokio::sync::Mutex<()>>,
    }

    #[async_trait]
    impl CachePort for MapCache {
        async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
            Ok(self.entries.lock().get(key).cloned())
        }

        async fn set_bytes(
            &self,
            key: &str,
            value: Vec<u8>,
            _ttl: Duration,
        ) -> Result<(), ApplicationError> {
            self.entries.lock().insert(key.to_string(), value);
            Ok(())
        }

        async fn invalidate(&self, key: &str) -> Result<(), ApplicationError> {
            self.entries.lock().remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
            Ok(self.entries.lock().contains_key(key))
        }

        async fn lock(&self, _key: &str) -> CacheLock {
            CacheLock::new(Arc::clone(&self.gate).lock_owned().await)
        }

        fn stats(&self) -> CacheStats {
            CacheStats::default()
        }
    }

    #[tokio::test]
    async fn typed_round_trip_through_bytes() {
        let cache = MapCache::default();
        let payload = serde_json::json!({ "timezone": "UTC" });

        cache
            .set("weather:test", &payload, Duration::from_secs(60))
            .await
            .unwrap();

        let read: Option<serde_json::Value> = cache.get("weather:test").await.unwrap();
        assert_eq!(read, Some(payload));
    }

    #[tokio::test]
    async fn typed_get_reports_corrupt_entries() {
        let cache = MapCache::default();
        cache
            .set_bytes("weather:bad", b"not json".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        let result: Result<Option<serde_json::Value>, _> = cache.get("weather:bad").await;
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }

    #[tokio::test]
    async fn typed_get_missing_is_none() {
        let cache = MapCache::default();
        let read: Option<String> = cache.get("nothing").await.unwrap();
        assert!(read.is_none());
    }

    #[tokio::test]
    async fn lock_is_released_on_drop() {
        let cache = MapCache::default();
        let first = cache.lock("k").await;
        drop(first);
        let _second = cache.lock("k").await;
    }

    #[test]
    fn cache_stats_hit_rate_zero_when_empty() {
        let stats = CacheStats::default();
        assert!(stats.hit_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn cache_stats_hit_rate_calculates_correctly() {
        let stats = CacheStats {
            hits: 75,
            misses: 25,
            entries: 100,
        };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn cache_stats_hit_rate_all_misses() {
        let stats = CacheStats {
            hits: 0,
            misses: 100,
            entries: 0,
        };
        assert!(stats.hit_rate().abs() < f64::EPSILON);
    }
}
