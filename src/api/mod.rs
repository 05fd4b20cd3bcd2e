//! Client for the imageboard's read-only JSON API.

mod wire;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{FetchError, FetchResult};
use crate::models::{Board, Post, Thread};
use crate::traits::{BoardFetcher, Headers, HttpClient};

pub use wire::{flatten_boards, BoardsResponse, CatalogResponse, ThreadResponse};

/// Production host.
pub const DEFAULT_BASE_URL: &str = "https://2ch.hk";

/// Typed API over any [`HttpClient`].
#[derive(Debug, Clone)]
pub struct ChanApi<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> ChanApi<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Point the client at another host (mirror, test server).
    pub fn with_base_url(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn boards_url(&self) -> String {
        format!("{}/makaba/mobile.fcgi?task=get_boards", self.base_url)
    }

    pub fn threads_url(&self, board: &str) -> String {
        format!("{}/{}/catalog.json", self.base_url, board)
    }

    pub fn posts_url(&self, board: &str, thread: u64) -> String {
        format!("{}/{}/res/{}.json", self.base_url, board, thread)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let response = self
            .client
            .get(url, &Headers::new())
            .await
            .map_err(|e| FetchError::from_http(url, e))?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        response.json().map_err(|e| FetchError::malformed(url, e))
    }
}

#[async_trait]
impl<C: HttpClient> BoardFetcher for ChanApi<C> {
    async fn fetch_boards(&self) -> FetchResult<Vec<Board>> {
        let url = self.boards_url();
        let response: BoardsResponse = self.get_json(&url).await.inspect_err(log_failure)?;
        let boards = flatten_boards(response);
        tracing::debug!("fetched {} boards", boards.len());
        Ok(boards)
    }

    async fn fetch_threads(&self, board: &str) -> FetchResult<Vec<Thread>> {
        let url = self.threads_url(board);
        let catalog: CatalogResponse = self.get_json(&url).await.inspect_err(log_failure)?;
        tracing::debug!("fetched {} threads from /{}/", catalog.threads.len(), board);
        Ok(catalog.threads)
    }

    async fn fetch_posts(&self, board: &str, thread: u64) -> FetchResult<Vec<Post>> {
        let url = self.posts_url(board, thread);
        let response: ThreadResponse = self.get_json(&url).await.inspect_err(log_failure)?;

        match response.into_posts() {
            Some(posts) if !posts.is_empty() => {
                tracing::debug!("fetched {} posts from /{}/{}", posts.len(), board, thread);
                Ok(posts)
            }
            _ => {
                let err = FetchError::EmptyResult {
                    board: board.to_string(),
                    thread,
                };
                log_failure(&err);
                Err(err)
            }
        }
    }
}

fn log_failure(err: &FetchError) {
    tracing::warn!("[{}] {}", err.error_code(), err);
}
