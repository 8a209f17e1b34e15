//! Request and Response models for the record service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query parameters and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ListQuery, MAX_LIST_LIMIT};
pub use responses::{ErrorResponse, HealthResponse, ListResponse, StatsResponse};
