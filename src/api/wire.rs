//! Response envelopes of the JSON endpoints.
//!
//! Only the fields the client reads are declared; everything else the server
//! sends is ignored by serde.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::{deserialize_nullable_vec, Board, Post, Thread};

/// `mobile.fcgi?task=get_boards`: category name to boards in that category.
pub type BoardsResponse = BTreeMap<String, Vec<Board>>;

/// Flatten categories in key order, keeping each category's board order.
pub fn flatten_boards(response: BoardsResponse) -> Vec<Board> {
    response.into_values().flatten().collect()
}

/// `/{board}/catalog.json`
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub threads: Vec<Thread>,
}

/// `/{board}/res/{thread}.json`
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub threads: Vec<ThreadPosts>,
}

#[derive(Debug, Deserialize)]
pub struct ThreadPosts {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub posts: Vec<Post>,
}

impl ThreadResponse {
    /// Posts of the first thread entry, or `None` if the server sent none.
    pub fn into_posts(self) -> Option<Vec<Post>> {
        self.threads.into_iter().next().map(|t| t.posts)
    }
}
