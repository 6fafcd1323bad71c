//! Cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::MokaCacheConfig;

/// Process-wide forecast cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached payloads (default: 1000)
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    /// Upper bound on any entry's lifetime in seconds (default: 24 hours)
    #[serde(default = "default_max_ttl")]
    pub max_ttl_secs: u64,
}

const fn default_max_entries() -> u64 {
    1_000
}

const fn default_max_ttl() -> u64 {
    24 * 60 * 60 // 24 hours
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            max_ttl_secs: default_max_ttl(),
        }
    }
}

impl CacheConfig {
    /// Convert to the cache adapter's configuration
    #[must_use]
    pub const fn to_moka_config(&self) -> MokaCacheConfig {
        MokaCacheConfig {
            max_entries: self.max_entries,
            max_ttl: Duration::from_secs(self.max_ttl_secs),
        }
    }
}
