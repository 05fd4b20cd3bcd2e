use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, deserialize_nullable_vec, deserialize_post_number};

/// A single post inside a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "num", deserialize_with = "deserialize_post_number")]
    pub id: u64,
    /// Raw HTML body
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub comment: String,
    /// Preformatted date string as sent by the server
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub date: String,
    /// Attachment metadata (the API calls these "files")
    #[serde(rename = "files", default, deserialize_with = "deserialize_nullable_vec")]
    pub images: Vec<Image>,
}

/// Attachment metadata. Binary content is never downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Server-side file name
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    /// Original file name as uploaded
    #[serde(
        rename = "fullname",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub full_name: String,
    /// Path relative to the site root
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub path: String,
}

impl Post {
    pub fn new(id: u64, comment: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            comment: comment.into(),
            date: date.into(),
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<Image>) -> Self {
        self.images = images;
        self
    }
}

impl Image {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            path: path.into(),
        }
    }
}
