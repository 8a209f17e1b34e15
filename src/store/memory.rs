//! In-Memory Record Store
//!
//! HashMap-backed implementation of [`RecordStore`] with stable
//! insertion-order listing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::{Record, RecordStore};

// == Store Internals ==
/// Map plus insertion order, guarded together so a listing reads one
/// consistent snapshot.
#[derive(Debug, Default)]
struct StoreInner {
    /// Records keyed by id
    records: HashMap<String, Record>,
    /// Ids in creation order; drives `list` pagination
    order: Vec<String>,
}

// == Memory Record Store ==
/// In-memory record store.
///
/// Never reports `StoreUnavailable`: that variant exists for remote-backed
/// implementations of the trait.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    inner: RwLock<StoreInner>,
}

impl MemoryRecordStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Current number of records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    // == Is Empty ==
    /// Returns true if no records have been created.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, name: String) -> Result<Record> {
        let record = Record::new(name);
        let mut inner = self.inner.write().await;
        inner.order.push(record.id.clone());
        inner.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Record>> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(id).cloned())
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Record>> {
        let inner = self.inner.read().await;
        let records = inner
            .order
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| inner.records.get(id).cloned())
            .collect();
        Ok(records)
    }
}
