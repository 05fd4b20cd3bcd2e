//! Mock HTTP client for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// Configured outcome for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// HTTP client returning canned responses keyed by exact URL.
///
/// Clones share state, so a test can keep a handle for assertions after
/// moving the client into an API wrapper.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_json("https://2ch.hk/b/catalog.json", serde_json::json!({"threads": []}));
/// let api = ChanApi::new(client.clone());
/// assert!(api.fetch_threads("b").await.unwrap().is_empty());
/// assert_eq!(client.request_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Respond to `url` with status 200 and the given JSON body.
    pub fn set_json(&self, url: &str, body: serde_json::Value) {
        self.set_response(url, MockResponse::Success(Response::json_body(&body)));
    }

    /// Respond to `url` with the given status and an empty body.
    pub fn set_status(&self, url: &str, status: u16) {
        self.set_response(url, MockResponse::Success(Response::new(status, "")));
    }

    pub fn set_error(&self, url: &str, error: HttpError) {
        self.set_response(url, MockResponse::Error(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Number of requests made to exactly `url`.
    pub fn count_for(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        let configured = self.responses.lock().unwrap().get(url).cloned();
        match configured {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {url}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_response() {
        let client = MockHttpClient::new();
        client.set_json("http://x/a", serde_json::json!({"ok": true}));

        let response = client.get("http://x/a", &Headers::new()).await.unwrap();
        assert!(response.is_success());
        assert_eq!(&response.body[..], br#"{"ok":true}"#);
        assert_eq!(client.count_for("http://x/a"), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_url_errors() {
        let client = MockHttpClient::new();
        let result = client.get("http://x/missing", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let client = MockHttpClient::new();
        let handle = client.clone();
        client.set_status("http://x/404", 404);

        let response = handle.get("http://x/404", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(client.request_count(), 1);

        client.clear_requests();
        assert!(handle.requests().is_empty());
    }

    #[tokio::test]
    async fn test_configured_error() {
        let client = MockHttpClient::new();
        client.set_error("http://x/down", HttpError::Timeout("1s".to_string()));
        let result = client.get("http://x/down", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("1s".to_string()));
    }
}
