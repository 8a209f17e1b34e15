//! Request DTOs for the record service API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Largest page a single listing request may ask for.
pub const MAX_LIST_LIMIT: usize = 100;

/// Page size used when the query string omits `limit`.
const DEFAULT_LIST_LIMIT: usize = 20;

/// Query parameters for the listing endpoint (GET /api/some)
///
/// # Fields
/// - `offset`: number of records to skip (defaults to 0)
/// - `limit`: maximum number of records to return (defaults to 20)
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Number of records to skip
    #[serde(default)]
    pub offset: usize,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListQuery {
    /// Validates the query parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.limit == 0 {
            return Some("Limit must be at least 1".to_string());
        }
        if self.limit > MAX_LIST_LIMIT {
            return Some(format!(
                "Limit exceeds maximum of {} records per page",
                MAX_LIST_LIMIT
            ));
        }
        None
    }
}
