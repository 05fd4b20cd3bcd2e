//! Test doubles that need no network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
