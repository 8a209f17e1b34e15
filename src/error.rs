//! Error types for the record service
//!
//! Provides unified error handling using thiserror.
//!
//! A lookup that finds nothing is not an error anywhere in this crate: the
//! store answers `Ok(None)` and the cache substitutes a placeholder record.
//! Only storage-layer unavailability and malformed requests surface here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the record service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The backing store could not be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::StoreUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the record service.
pub type Result<T> = std::result::Result<T, ServiceError>;
