//! API Module
//!
//! HTTP handlers and routing for the record service REST API.
//!
//! # Endpoints
//! - `GET /api/some/:id` - Retrieve a record by id (through the cache)
//! - `GET /api/some` - Paged listing of records (straight from the store)
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
