//! Error types for chanview.
//!
//! | Error | Raised by | Interactive mode | Print mode |
//! |-------|-----------|------------------|------------|
//! | [`FetchError`] | data fetchers | status line, view unchanged | fatal, exit 1 |
//! | [`InputParseError`] | argument parsing | n/a | fatal, exit 1 |
//!
//! The markup formatter never fails.

mod fetch;
mod input;

pub use fetch::FetchError;
pub use input::InputParseError;

/// Result alias for data fetches.
pub type FetchResult<T> = Result<T, FetchError>;
