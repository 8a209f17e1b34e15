//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Expiry is already checked lazily at read time; the sweep only keeps the
//! cache map from accumulating entries nobody reads again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ReadThroughCache;
use crate::store::RecordStore;

/// Spawns a background task that periodically evicts expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps.
///
/// # Arguments
/// * `cache` - Shared reference to the read-through cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task<S>(
    cache: Arc<ReadThroughCache<S>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    S: RecordStore + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.evict_expired().await;

            // Log sweep statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
