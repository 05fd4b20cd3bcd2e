//! Runtime configuration.
//!
//! Use the builder pattern to customize behavior.
//!
//! # Example
//!
//! ```
//! use chanview::app::BackPolicy;
//! use chanview::config::Config;
//!
//! let config = Config::default()
//!     .with_base_url("https://2ch.life")
//!     .with_back_policy(BackPolicy::Refetch);
//! assert_eq!(config.nav().back_policy, BackPolicy::Refetch);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::reqwest_http::DEFAULT_TIMEOUT;
use crate::api::DEFAULT_BASE_URL;
use crate::app::{BackPolicy, NavConfig, DEFAULT_PAGE_STEP, DEFAULT_PREVIEW_WIDTH};

/// Overrides the API host.
pub const ENV_BASE_URL: &str = "CHANVIEW_BASE_URL";

/// Overrides the log file path.
pub const ENV_LOG: &str = "CHANVIEW_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API host, without trailing slash (default: https://2ch.hk)
    pub base_url: String,
    /// Per-request timeout (default: 15s)
    pub timeout: Duration,
    /// What "back" from a post list does (default: cached)
    pub back_policy: BackPolicy,
    /// Rows moved by PageUp/PageDown (default: 4)
    pub page_step: usize,
    /// Characters of comment in a thread row (default: 180)
    pub preview_width: usize,
    /// Log file; `None` disables logging
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            back_policy: BackPolicy::default(),
            page_step: DEFAULT_PAGE_STEP,
            preview_width: DEFAULT_PREVIEW_WIDTH,
            log_path: default_log_path(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_back_policy(mut self, policy: BackPolicy) -> Self {
        self.back_policy = policy;
        self
    }

    /// Set the page step; zero is raised to one.
    pub fn with_page_step(mut self, step: usize) -> Self {
        self.page_step = step.max(1);
        self
    }

    pub fn with_preview_width(mut self, width: usize) -> Self {
        self.preview_width = width;
        self
    }

    pub fn with_log_path(mut self, path: Option<PathBuf>) -> Self {
        self.log_path = path;
        self
    }

    /// Defaults plus `CHANVIEW_BASE_URL` and `CHANVIEW_LOG` overrides.
    ///
    /// An empty `CHANVIEW_LOG` disables logging.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(path) = lookup(ENV_LOG) {
            let path = path.trim();
            config.log_path = (!path.is_empty()).then(|| PathBuf::from(path));
        }

        config
    }

    /// The part of the configuration the state machine uses.
    pub fn nav(&self) -> NavConfig {
        NavConfig {
            back_policy: self.back_policy,
            page_step: self.page_step,
            preview_width: self.preview_width,
        }
    }
}

/// `<cache dir>/chanview/chanview.log`
fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("chanview").join("chanview.log"))
}
