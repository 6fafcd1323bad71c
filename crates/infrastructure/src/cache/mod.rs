//! Cache implementations
//!
//! - `MokaCache`: in-memory cache with per-entry TTL and per-key locks

mod moka_cache;

pub use moka_cache::{MokaCache, MokaCacheConfig};

/// Prefix shared by every forecast cache key
pub const FORECAST_KEY_PREFIX: &str = "weather:darksky";

/// Derive the cache key for a canonical forecast URL
///
/// The URL is hashed with blake3 so keys have a fixed length regardless of
/// coordinates and query parameters.
#[must_use]
pub fn forecast_cache_key(canonical_url: &str) -> String {
    let hash = blake3::hash(canonical_url.as_bytes());
    format!("{FORECAST_KEY_PREFIX}:{}", hash.to_hex())
}
