use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Deserialize;
use tracing::{debug, warn};

use farelink_core::search::SearchResponse;

pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;
pub const DEFAULT_CLEANUP_INTERVAL_MINUTES: i64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_expiration")]
    pub expiration_minutes: i64,
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: i64,
}

fn default_enabled() -> bool {
    true
}

fn default_expiration() -> i64 {
    DEFAULT_EXPIRATION_MINUTES
}

fn default_cleanup_interval() -> i64 {
    DEFAULT_CLEANUP_INTERVAL_MINUTES
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            cleanup_interval_minutes: DEFAULT_CLEANUP_INTERVAL_MINUTES,
        }
    }
}

/// Response cache keyed by the request fingerprint. Safe for concurrent
/// access from simultaneous search requests.
pub trait SearchCache: Send + Sync {
    fn get(&self, key: &str) -> Option<SearchResponse>;
    fn set(&self, key: &str, value: SearchResponse);
    fn delete(&self, key: &str);
}

struct CacheEntry {
    value: SearchResponse,
    expires_at: Instant,
}

/// In-process TTL cache. Expired entries are dropped lazily on lookup and
/// in bulk by the periodic sweeper, so a stale entry is never served.
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    default_ttl: Duration,
    cleanup_interval: Duration,
}

impl MemoryCache {
    pub fn new(config: &CacheConfig) -> Self {
        let mut expiration = config.expiration_minutes;
        if expiration <= 0 {
            warn!(
                "invalid cache expiration {}m, using default {}m",
                expiration, DEFAULT_EXPIRATION_MINUTES
            );
            expiration = DEFAULT_EXPIRATION_MINUTES;
        }
        let mut cleanup = config.cleanup_interval_minutes;
        if cleanup <= 0 {
            warn!(
                "invalid cache cleanup interval {}m, using default {}m",
                cleanup, DEFAULT_CLEANUP_INTERVAL_MINUTES
            );
            cleanup = DEFAULT_CLEANUP_INTERVAL_MINUTES;
        }

        Self::with_ttl(
            Duration::from_secs(expiration as u64 * 60),
            Duration::from_secs(cleanup as u64 * 60),
        )
    }

    pub fn with_ttl(default_ttl: Duration, cleanup_interval: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
            cleanup_interval,
        }
    }

    /// Removes every expired entry, returning how many were dropped.
    pub fn sweep(&self) -> usize {
        let before = self.entries.len();
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before - self.entries.len()
    }

    /// Starts the background eviction task on the current runtime.
    pub fn spawn_sweeper(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(cache.cleanup_interval);
            // The first tick completes immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = cache.sweep();
                if removed > 0 {
                    debug!("cache sweep removed {} expired entries", removed);
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SearchCache for MemoryCache {
    fn get(&self, key: &str) -> Option<SearchResponse> {
        let entry = self.entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: SearchResponse) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + self.default_ttl,
            },
        );
    }

    fn delete(&self, key: &str) {
        self.entries.remove(key);
    }
}
