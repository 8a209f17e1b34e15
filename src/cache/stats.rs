//! Cache Statistics Module
//!
//! Tracks hit/miss/expiry counters for the read-through cache.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

// == Cache Stats ==
/// Lock-free lookup counters.
///
/// Atomic so concurrent lookups can bump them while holding only a read
/// lock on the cache map.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups served from the cache
    hits: AtomicU64,
    /// Lookups that had to consult the store
    misses: AtomicU64,
    /// Entries found stale at read time
    expired: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates stats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Expired ==
    /// Increments the stale-at-read counter.
    pub fn record_expired(&self) {
        self.expired.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Point-in-time copy of the counters, combined with the caller's
    /// current entry count.
    pub fn snapshot(&self, entries: usize) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            entries,
        }
    }
}

// == Stats Snapshot ==
/// Serializable view of the counters plus the live entry count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatsSnapshot {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that consulted the store
    pub misses: u64,
    /// Entries found stale at read time
    pub expired: u64,
    /// Entries currently held, fresh or not
    pub entries: usize,
}

impl CacheStatsSnapshot {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
