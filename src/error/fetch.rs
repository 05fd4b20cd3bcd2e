//! Data fetch errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a board, catalog or thread fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("cannot parse response from {url}: {message}")]
    Malformed { url: String, message: String },

    /// A thread fetch returned no posts; the API uses this for unknown threads.
    #[error("thread /{board}/{thread} has no posts")]
    EmptyResult { board: String, thread: u64 },
}

impl FetchError {
    /// Every client failure happens before a status is seen.
    pub fn from_http(url: &str, err: HttpError) -> Self {
        FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn malformed(url: &str, err: impl std::fmt::Display) -> Self {
        FetchError::Malformed {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { .. } => {
                "Unable to reach the server. Check your connection.".to_string()
            }
            FetchError::Status { status, .. } => match *status {
                404 => "Not found.".to_string(),
                429 => "Too many requests. Wait a moment.".to_string(),
                500..=599 => format!("The server is having trouble (HTTP {status})."),
                _ => format!("The server returned HTTP {status}."),
            },
            FetchError::Malformed { .. } => "Received a response that could not be read.".to_string(),
            FetchError::EmptyResult { board, thread } => {
                format!("Thread /{board}/{thread} not found.")
            }
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "E_FETCH_TRANSPORT",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Malformed { .. } => "E_FETCH_MALFORMED",
            FetchError::EmptyResult { .. } => "E_FETCH_EMPTY",
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            FetchError::Malformed { .. } => false,
            FetchError::EmptyResult { .. } => false,
        }
    }
}
