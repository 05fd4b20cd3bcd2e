//! Command-line interface.
//!
//! - [`args`] - argument parsing into a [`CliCommand`]
//! - [`print`] - non-interactive listing of boards, threads and posts
//! - [`version`] - version and usage text
//!
//! Any error in print mode is fatal: `main` prints
//! [`CliError::user_message`] to stderr and exits with status 1.

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use print::run_query;
pub use version::{usage_text, version_text, VERSION};

use std::io;
use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::api::ChanApi;
use crate::config::Config;
use crate::error::{FetchError, InputParseError};

/// Failure of a non-interactive command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),

    #[error("cannot create HTTP client: {0}")]
    Client(String),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            CliError::Input(err) => err.user_message(),
            CliError::Fetch(err) => format!("{} ({})", err.user_message(), err),
            CliError::Io(err) => format!("Cannot write output: {err}"),
            CliError::Client(message) => format!("Cannot create HTTP client: {message}"),
        }
    }
}

/// Run a query command against the configured host, printing to stdout.
pub fn run(config: &Config, command: &CliCommand) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let client =
        ReqwestHttpClient::with_timeout(config.timeout).map_err(|e| CliError::Client(e.to_string()))?;
    let api = ChanApi::with_base_url(client, &config.base_url);

    tracing::info!("print mode: {:?}", command);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(run_query(&api, command, &mut out))
}
