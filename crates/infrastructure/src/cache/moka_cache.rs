//! Moka in-memory cache implementation
//!
//! Thread-safe, process-wide cache. Each entry expires after the TTL it was
//! stored with, bounded by a cache-wide maximum lifetime.

use std::{
    collections::HashMap,
    sync::{
        Arc, Weak,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use application::{
    error::ApplicationError,
    ports::{CacheLock, CachePort, CacheStats},
};
use async_trait::async_trait;
use moka::{Expiry, future::Cache};
use parking_lot::Mutex;
use tracing::{debug, instrument};

/// Configuration for Moka cache
#[derive(Debug, Clone, Copy)]
pub struct MokaCacheConfig {
    /// Maximum number of entries before eviction
    pub max_entries: u64,
    /// Upper bound on any entry's lifetime
    pub max_ttl: Duration,
}

impl Default for MokaCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1_000,
            max_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// Stored value together with the TTL it was written with
#[derive(Debug, Clone)]
struct Entry {
    bytes: Arc<[u8]>,
    ttl: Duration,
}

/// Expires each entry after its own TTL
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Moka-based in-memory cache
///
/// Reads never wait on key locks. Key locks are created on demand and
/// dropped once nobody holds or waits for them.
pub struct MokaCache {
    cache: Cache<String, Entry>,
    locks: Mutex<HashMap<String, Weak<tokio::sync::Mutex<()>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for MokaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCache")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .field("hit_rate", &self.stats().hit_rate())
            .finish_non_exhaustive()
    }
}

impl MokaCache {
    /// Create a new Moka cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MokaCacheConfig::default())
    }

    /// Create a new Moka cache with custom configuration
    #[must_use]
    pub fn with_config(config: MokaCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.max_ttl)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            locks: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Shared mutex for `key`, creating it if nobody holds one
    fn key_mutex(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        locks.retain(|_, weak| weak.strong_count() > 0);

        if let Some(existing) = locks.get(key).and_then(Weak::upgrade) {
            return existing;
        }

        let mutex = Arc::new(tokio::sync::Mutex::new(()));
        locks.insert(key.to_string(), Arc::downgrade(&mutex));
        mutex
    }
}

impl Default for MokaCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CachePort for MokaCache {
    #[instrument(skip(self), level = "debug")]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        if let Some(entry) = self.cache.get(key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache hit");
            Ok(Some(entry.bytes.to_vec()))
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache miss");
            Ok(None)
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), ApplicationError> {
        if ttl.is_zero() {
            return Err(ApplicationError::Internal(
                "cache TTL must be greater than zero".to_string(),
            ));
        }

        let entry = Entry {
            bytes: Arc::from(value),
            ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        debug!(key = %key, ttl_secs = ttl.as_secs(), "Cache set");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn invalidate(&self, key: &str) -> Result<(), ApplicationError> {
        self.cache.invalidate(key).await;
        debug!(key = %key, "Cache invalidated");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
        Ok(self.cache.contains_key(key))
    }

    async fn lock(&self, key: &str) -> CacheLock {
        let mutex = self.key_mutex(key);
        CacheLock::new(mutex.lock_owned().await)
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use application::ports::CachePortExt;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        value: String,
        count: i32,
    }

    #[tokio::test]
    async fn set_and_get_value() {
        let cache = MokaCache::new();
        let data = TestData {
            value: "hello".to_string(),
            count: 42,
        };

        cache
            .set("test_key", &data, Duration::from_secs(60))
            .await
            .unwrap();

        let retrieved: Option<TestData> = cache.get("test_key").await.unwrap();
        assert_eq!(retrieved, Some(data));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let cache = MokaCache::new();
        let result: Option<TestData> = cache.get("nonexistent").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn entry_expires_after_its_own_ttl() {
        let cache = MokaCache::new();
        cache
            .set_bytes("short", b"a".to_vec(), Duration::from_millis(100))
            .await
            .unwrap();
        cache
            .set_bytes("long", b"b".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(cache.get_bytes("short").await.unwrap().is_none());
        assert_eq!(cache.get_bytes("long").await.unwrap(), Some(b"b".to_vec()));
    }

    #[tokio::test]
    async fn max_ttl_caps_entry_lifetime() {
        let cache = MokaCache::with_config(MokaCacheConfig {
            max_entries: 10,
            max_ttl: Duration::from_millis(100),
        });
        cache
            .set_bytes("key", b"v".to_vec(), Duration::from_secs(3600))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(cache.get_bytes("key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn overwrite_replaces_value_and_ttl() {
        let cache = MokaCache::new();
        cache
            .set_bytes("key", b"old".to_vec(), Duration::from_millis(100))
            .await
            .unwrap();
        cache
            .set_bytes("key", b"new".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(cache.get_bytes("key").await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn zero_ttl_is_rejected() {
        let cache = MokaCache::new();
        let result = cache.set_bytes("key", b"v".to_vec(), Duration::ZERO).await;
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
        assert!(!cache.exists("key").await.unwrap());
    }

    #[tokio::test]
    async fn invalidate_removes_entry() {
        let cache = MokaCache::new();
        cache
            .set("key", &"value".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        cache.invalidate("key").await.unwrap();

        let result: Option<String> = cache.get("key").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn exists_reflects_presence() {
        let cache = MokaCache::new();
        cache
            .set("key", &"value".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        assert!(cache.exists("key").await.unwrap());
        assert!(!cache.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn stats_tracks_hits_and_misses() {
        let cache = MokaCache::new();
        cache
            .set("key", &"value".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        let _: Option<String> = cache.get("key").await.unwrap();
        let _: Option<String> = cache.get("missing1").await.unwrap();
        let _: Option<String> = cache.get("missing2").await.unwrap();

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
    }

    #[tokio::test]
    async fn lock_serializes_holders_of_same_key() {
        let cache = Arc::new(MokaCache::new());
        let guard = cache.lock("key").await;

        let waiter = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                let _guard = cache.lock("key").await;
            })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should acquire after release")
            .unwrap();
    }

    #[tokio::test]
    async fn locks_on_different_keys_do_not_contend() {
        let cache = MokaCache::new();
        let _a = cache.lock("a").await;
        let b = tokio::time::timeout(Duration::from_millis(100), cache.lock("b")).await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn released_locks_are_pruned() {
        let cache = MokaCache::new();
        drop(cache.lock("a").await);
        drop(cache.lock("b").await);
        let _c = cache.lock("c").await;
        assert_eq!(cache.locks.lock().len(), 1);
    }

    #[tokio::test]
    async fn reads_do_not_wait_for_locks() {
        let cache = MokaCache::new();
        cache
            .set_bytes("key", b"v".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        let _guard = cache.lock("key").await;

        let read = tokio::time::timeout(Duration::from_millis(100), cache.get_bytes("key")).await;
        assert_eq!(read.unwrap().unwrap(), Some(b"v".to_vec()));
    }

    #[tokio::test]
    async fn stats_shows_entry_count() {
        let cache = MokaCache::new();
        for key in ["key1", "key2", "key3"] {
            cache
                .set_bytes(key, b"1".to_vec(), Duration::from_secs(60))
                .await
                .unwrap();
        }

        cache.cache.run_pending_tasks().await;

        assert_eq!(cache.stats().entries, 3);
    }

    #[test]
    fn default_config_values() {
        let config = MokaCacheConfig::default();
        assert_eq!(config.max_entries, 1_000);
        assert_eq!(config.max_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn moka_cache_debug() {
        let cache = MokaCache::new();
        let debug = format!("{cache:?}");
        assert!(debug.contains("MokaCache"));
        assert!(debug.contains("entries"));
    }

    #[tokio::test]
    async fn debug_reports_hit_rate() {
        let cache = MokaCache::new();
        cache
            .set_bytes("key", b"v".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        cache.get_bytes("key").await.unwrap();
        cache.get_bytes("missing").await.unwrap();

        assert!((cache.stats().hit_rate() - 0.5).abs() < f64::EPSILON);
        assert!(format!("{cache:?}").contains("hit_rate: 0.5"));
    }
}
