//! Response DTOs for the record service API
//!
//! Defines the structure of outgoing HTTP response bodies. The single-record
//! endpoint serializes [`Record`](crate::store::Record) directly; everything
//! else goes through the DTOs here.
//!
//! DTOs also derive `Deserialize` so the smoke client can read them back.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStatsSnapshot;
use crate::store::Record;

/// Response body for the listing endpoint (GET /api/some)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// One page of records, in store order
    pub records: Vec<Record>,
    /// Offset the page started at
    pub offset: usize,
    /// Limit the page was capped to
    pub limit: usize,
    /// Number of records actually in this page
    pub count: usize,
}

impl ListResponse {
    /// Creates a ListResponse for one page of records
    pub fn new(records: Vec<Record>, offset: usize, limit: usize) -> Self {
        let count = records.len();
        Self {
            records,
            offset,
            limit,
            count,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that consulted the store
    pub misses: u64,
    /// Entries found stale at read time
    pub expired: u64,
    /// Entries currently cached
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a StatsResponse from a cache counter snapshot
    pub fn from_snapshot(snapshot: CacheStatsSnapshot) -> Self {
        let hit_rate = snapshot.hit_rate();
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            expired: snapshot.expired,
            entries: snapshot.entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}
