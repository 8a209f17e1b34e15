//! Record Model
//!
//! The stored entity: a store-assigned id plus a free-form name.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name carried by the substitute record returned for unknown ids.
pub const PLACEHOLDER_NAME: &str = "nope";

// == Record ==
/// A stored record.
///
/// Ids are assigned by the store on creation and immutable afterwards.
/// Names are free-form and may be empty, but are always present as a
/// string in serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned unique id
    pub id: String,
    /// Free-form display name
    pub name: String,
}

impl Record {
    // == Constructor ==
    /// Creates a record with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    // == Placeholder ==
    /// Substitute returned when a lookup finds nothing.
    ///
    /// Echoes the requested id so the response body always carries a real
    /// id string. Callers must not write this record back to any cache or
    /// store.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: PLACEHOLDER_NAME.to_string(),
        }
    }
}
