//! Cache Entry Module
//!
//! A cached record with its expiry bookkeeping.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::store::Record;

// == Cache Entry ==
/// A single cached record.
///
/// Entries are never mutated in place: refreshing a key inserts a
/// replacement entry rather than touching this one.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached record
    pub record: Record,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after now.
    pub fn new(record: Record, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            record,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so a fully elapsed
    /// TTL expires the entry immediately.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
