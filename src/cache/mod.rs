//! Cache Module
//!
//! Fixed-TTL read-through caching over a record store.

mod entry;
mod read_through;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use read_through::{ReadThroughCache, DEFAULT_TTL};
pub use stats::{CacheStats, CacheStatsSnapshot};
