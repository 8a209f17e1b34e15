//! Record Store Module
//!
//! Keyed storage of records behind an async trait, plus the in-memory
//! implementation the service runs on.

mod memory;
mod record;

pub use memory::MemoryRecordStore;
pub use record::{Record, PLACEHOLDER_NAME};

use async_trait::async_trait;

use crate::error::Result;

// == Record Store Trait ==
/// Keyed persistence for records.
///
/// A missing id is a soft outcome (`Ok(None)`), never an error.
/// Implementations fail only when the backing storage itself is
/// unreachable, reported as `ServiceError::StoreUnavailable`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists a new record under a store-assigned id and returns it.
    async fn create(&self, name: String) -> Result<Record>;

    /// Returns the record for `id`, or `None` if it was never created.
    async fn get_by_id(&self, id: &str) -> Result<Option<Record>>;

    /// Returns up to `limit` records starting at `offset`, in insertion
    /// order. An offset past the end yields an empty page.
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Record>>;
}
