use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string};

/// A thread as listed in a board catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    /// Thread number (the API sends it as "num", sometimes as a string)
    #[serde(rename = "num", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub subject: String,
    /// Raw HTML of the opening post, possibly shortened by the server
    #[serde(
        rename = "comment",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub comment_excerpt: String,
}

impl Thread {
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        comment_excerpt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            comment_excerpt: comment_excerpt.into(),
        }
    }

    /// Numeric thread id as needed by the posts endpoint.
    ///
    /// Returns `None` when the id is not a non-negative integer.
    pub fn number(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }
}
