//! Record Cache - a demo record service with a TTL read-through cache
//!
//! Serves records over HTTP from an in-memory store, fronting the id lookup
//! with a fixed-TTL read-through cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
