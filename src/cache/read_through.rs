//! Read-Through Cache Module
//!
//! Fixed-TTL cache in front of a record store: hits skip the store, misses
//! fetch through it and populate the cache on the way back.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, CacheStatsSnapshot};
use crate::error::Result;
use crate::store::{Record, RecordStore};

/// Fixed lifetime of cached records: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

// == Read-Through Cache ==
/// TTL cache wrapping `get_by_id` on a [`RecordStore`].
///
/// Lookup order is cache, then store. Records found in the store are
/// cached for the configured TTL; absent ids yield the placeholder record
/// and are never cached. The store round-trip runs with no lock held, so
/// two concurrent misses for one id may both reach the store and both
/// write the entry — the writes are idempotent, last one wins.
pub struct ReadThroughCache<S> {
    /// Source of truth consulted on every miss
    store: Arc<S>,
    /// Cached entries keyed by record id
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Entry lifetime, fixed at construction
    ttl: Duration,
    /// Hit/miss accounting
    stats: CacheStats,
}

impl<S: RecordStore> ReadThroughCache<S> {
    // == Constructors ==
    /// Creates a cache with the default one-hour TTL.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    /// Creates a cache with a custom TTL.
    pub fn with_ttl(store: Arc<S>, ttl: Duration) -> Self {
        Self {
            store,
            entries: RwLock::new(HashMap::new()),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Get By Id ==
    /// Returns the record for `id`, consulting the store only on a miss.
    ///
    /// Expired entries are treated as misses and replaced by the refreshed
    /// record. Unknown ids produce [`Record::placeholder`]; only records
    /// that exist in the store are written back to the cache. Store errors
    /// propagate unchanged.
    pub async fn get_by_id(&self, id: &str) -> Result<Record> {
        {
            let entries = self.entries.read().await;
            match entries.get(id) {
                Some(entry) if !entry.is_expired() => {
                    self.stats.record_hit();
                    debug!(%id, "cache hit");
                    return Ok(entry.record.clone());
                }
                Some(_) => {
                    // Stale entry; the insert below replaces it
                    self.stats.record_expired();
                }
                None => {}
            }
        }

        self.stats.record_miss();
        debug!(%id, "cache miss");

        match self.store.get_by_id(id).await? {
            Some(record) => {
                let entry = CacheEntry::new(record.clone(), self.ttl);
                self.entries.write().await.insert(id.to_string(), entry);
                Ok(record)
            }
            None => {
                // Absent ids are never cached; drop any stale entry left
                // over from when the record still existed
                self.entries.write().await.remove(id);
                Ok(Record::placeholder(id))
            }
        }
    }

    // == Evict Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn evict_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Stats ==
    /// Counter snapshot including the current entry count.
    pub async fn stats(&self) -> CacheStatsSnapshot {
        let entries = self.entries.read().await.len();
        self.stats.snapshot(entries)
    }

    // == Length ==
    /// Current number of cached entries, fresh or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::ServiceError;
    use crate::store::{MemoryRecordStore, PLACEHOLDER_NAME};

    /// Store double that counts `get_by_id` calls.
    struct CountingStore {
        inner: MemoryRecordStore,
        lookups: AtomicUsize,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                inner: MemoryRecordStore::new(),
                lookups: AtomicUsize::new(0),
            }
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordStore for CountingStore {
        async fn create(&self, name: String) -> Result<Record> {
            self.inner.create(name).await
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Record>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.get_by_id(id).await
        }

        async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Record>> {
            self.inner.list(offset, limit).await
        }
    }

    /// Store double whose backing storage is permanently unreachable.
    struct UnavailableStore;

    #[async_trait]
    impl RecordStore for UnavailableStore {
        async fn create(&self, _name: String) -> Result<Record> {
            Err(ServiceError::StoreUnavailable("storage offline".to_string()))
        }

        async fn get_by_id(&self, _id: &str) -> Result<Option<Record>> {
            Err(ServiceError::StoreUnavailable("storage offline".to_string()))
        }

        async fn list(&self, _offset: usize, _limit: usize) -> Result<Vec<Record>> {
            Err(ServiceError::StoreUnavailable("storage offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_miss_fetches_and_caches() {
        let store = Arc::new(CountingStore::new());
        let created = store.create("Velvet Orchestra".to_string()).await.unwrap();
        let cache = ReadThroughCache::new(store.clone());

        let fetched = cache.get_by_id(&created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(store.lookups(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_second_lookup_within_ttl_skips_store() {
        let store = Arc::new(CountingStore::new());
        let created = store.create("Neon Choir".to_string()).await.unwrap();
        let cache = ReadThroughCache::new(store.clone());

        let first = cache.get_by_id(&created.id).await.unwrap();
        let second = cache.get_by_id(&created.id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.lookups(), 1, "hit must not touch the store");

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_one_refresh() {
        let store = Arc::new(CountingStore::new());
        let created = store.create("Midnight Parade".to_string()).await.unwrap();
        let cache = ReadThroughCache::with_ttl(store.clone(), Duration::from_millis(40));

        cache.get_by_id(&created.id).await.unwrap();
        assert_eq!(store.lookups(), 1);

        tokio::time::sleep(Duration::from_millis(80)).await;

        let refreshed = cache.get_by_id(&created.id).await.unwrap();
        assert_eq!(refreshed, created);
        assert_eq!(store.lookups(), 2, "expired entry refreshes exactly once");

        // The refreshed entry serves hits again
        cache.get_by_id(&created.id).await.unwrap();
        assert_eq!(store.lookups(), 2);

        let stats = cache.stats().await;
        assert_eq!(stats.expired, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_returns_placeholder_uncached() {
        let store = Arc::new(CountingStore::new());
        let cache = ReadThroughCache::new(store.clone());

        let substitute = cache.get_by_id("never-created").await.unwrap();
        assert_eq!(substitute.name, PLACEHOLDER_NAME);
        assert_eq!(substitute.id, "never-created");
        assert!(cache.is_empty().await, "absent ids must not be cached");

        // Every repeat lookup goes back to the store
        cache.get_by_id("never-created").await.unwrap();
        assert_eq!(store.lookups(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_misses_agree_on_value() {
        let store = Arc::new(CountingStore::new());
        let created = store.create("Golden Syndicate".to_string()).await.unwrap();
        let cache = Arc::new(ReadThroughCache::new(store.clone()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let id = created.id.clone();
            handles.push(tokio::spawn(async move { cache.get_by_id(&id).await }));
        }

        for handle in handles {
            let record = handle.await.unwrap().unwrap();
            assert_eq!(record, created);
        }

        // Racing misses may each have hit the store, but exactly one entry
        // survives and it matches the stored record
        assert_eq!(cache.len().await, 1);
        let cached = cache.get_by_id(&created.id).await.unwrap();
        assert_eq!(cached, created);
        assert!(store.lookups() <= 8);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let cache = ReadThroughCache::new(Arc::new(UnavailableStore));

        let result = cache.get_by_id("any-id").await;
        assert!(matches!(result, Err(ServiceError::StoreUnavailable(_))));
        assert!(cache.is_empty().await, "failures must not be cached");
    }

    #[tokio::test]
    async fn test_evict_expired_removes_only_stale_entries() {
        let store = Arc::new(MemoryRecordStore::new());
        let short_lived = store.create("short".to_string()).await.unwrap();
        let cache = ReadThroughCache::with_ttl(store.clone(), Duration::from_millis(40));

        cache.get_by_id(&short_lived.id).await.unwrap();
        assert_eq!(cache.evict_expired().await, 0);

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(cache.evict_expired().await, 1);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_stats_entry_count_tracks_map() {
        let store = Arc::new(MemoryRecordStore::new());
        let a = store.create("a".to_string()).await.unwrap();
        let b = store.create("b".to_string()).await.unwrap();
        let cache = ReadThroughCache::new(store.clone());

        cache.get_by_id(&a.id).await.unwrap();
        cache.get_by_id(&b.id).await.unwrap();

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 0);
    }
}
