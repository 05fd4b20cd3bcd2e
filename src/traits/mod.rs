//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - raw HTTP GET transport
//! - [`BoardFetcher`] - typed board/catalog/thread retrieval built on top of it

pub mod fetcher;
pub mod http;

pub use fetcher::BoardFetcher;
pub use http::{Headers, HttpClient, HttpError, Response};
