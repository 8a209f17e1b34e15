//! API Handlers
//!
//! HTTP request handlers for each record service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::ReadThroughCache;
use crate::error::{Result, ServiceError};
use crate::models::{HealthResponse, ListQuery, ListResponse, StatsResponse};
use crate::store::{MemoryRecordStore, Record, RecordStore};

/// Application state shared across all handlers.
///
/// Wiring is explicit: the store and the cache over it are constructed at
/// startup and handed to the router, never resolved from ambient context.
/// The cache holds its own handle to the same store it fronts.
#[derive(Clone)]
pub struct AppState {
    /// Source-of-truth record store
    pub store: Arc<MemoryRecordStore>,
    /// Read-through cache over the same store
    pub cache: Arc<ReadThroughCache<MemoryRecordStore>>,
}

impl AppState {
    /// Creates state from an existing store and cache pair.
    pub fn new(
        store: Arc<MemoryRecordStore>,
        cache: Arc<ReadThroughCache<MemoryRecordStore>>,
    ) -> Self {
        Self { store, cache }
    }

    /// Creates state from configuration: a fresh store plus a cache with
    /// the configured TTL.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = Arc::new(MemoryRecordStore::new());
        let cache = Arc::new(ReadThroughCache::with_ttl(
            store.clone(),
            Duration::from_secs(config.cache_ttl),
        ));
        Self::new(store, cache)
    }
}

/// Handler for GET /api/some/:id
///
/// Looks the record up through the read-through cache. An unknown id still
/// answers 200, carrying the placeholder record — absence is not an error
/// on this surface.
pub async fn get_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>> {
    let record = state.cache.get_by_id(&id).await?;
    Ok(Json(record))
}

/// Handler for GET /api/some
///
/// Pages through the store directly; listings bypass the cache.
pub async fn list_records_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    // Validate query parameters
    if let Some(error_msg) = query.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let records = state.store.list(query.offset, query.limit).await?;

    Ok(Json(ListResponse::new(records, query.offset, query.limit)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.cache.stats().await;

    Json(StatsResponse::from_snapshot(snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
