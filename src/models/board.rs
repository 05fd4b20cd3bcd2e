use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// A top-level board, e.g. `b` or `pr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Short board id used in URLs
    pub id: String,
    /// Category the board is listed under
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub category: String,
    /// Human-readable board name
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}

impl Board {
    pub fn new(id: impl Into<String>, category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
        }
    }
}
