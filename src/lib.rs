//! chanview - browse imageboards from the terminal
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod markup;
pub mod models;
pub mod runner;
pub mod terminal;
pub mod traits;
pub mod ui;
