//! Data fetcher abstraction consumed by the interactive runner and print mode.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::{Board, Post, Thread};

/// Source of boards, catalogs and threads.
///
/// Each call is a single request; results are ordered as the server sent
/// them. Implementations must not cache across calls.
#[async_trait]
pub trait BoardFetcher: Send + Sync {
    async fn fetch_boards(&self) -> FetchResult<Vec<Board>>;

    async fn fetch_threads(&self, board: &str) -> FetchResult<Vec<Thread>>;

    /// Posts of one thread. An unknown thread yields
    /// [`crate::error::FetchError::EmptyResult`].
    async fn fetch_posts(&self, board: &str, thread: u64) -> FetchResult<Vec<Post>>;
}
