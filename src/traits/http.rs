//! HTTP transport abstraction.
//!
//! The API layer only ever issues GET requests for JSON documents, so the
//! trait is deliberately small. Production code uses
//! [`crate::adapters::ReqwestHttpClient`]; tests use
//! [`crate::adapters::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 response with the given JSON document as body.
    pub fn json_body(value: &serde_json::Value) -> Self {
        Self::new(200, value.to_string())
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// Minimal async HTTP client.
///
/// # Example
///
/// ```ignore
/// use chanview::traits::{Headers, HttpClient, HttpError};
///
/// async fn catalog_status<C: HttpClient>(client: &C) -> Result<u16, HttpError> {
///     let response = client.get("https://2ch.hk/b/catalog.json", &Headers::new()).await?;
///     Ok(response.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// Non-2xx responses are returned as `Ok`; callers check
    /// [`Response::is_success`].
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
