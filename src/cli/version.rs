//! Version and usage text.

/// The current version of chanview, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("chanview {VERSION}")
}

pub fn usage_text() -> String {
    format!(
        "{}
Browse imageboards from the terminal.

Usage:
  chanview                   start the interactive browser
  chanview .                 print the board list
  chanview <board>           print the threads of <board>
  chanview <board> <thread>  print the posts of a thread

Options:
  -h, --help     print this help
  -V, --version  print the version

Environment:
  CHANVIEW_BASE_URL  API host (default https://2ch.hk)
  CHANVIEW_LOG       log file path, empty to disable logging
  RUST_LOG           log filter (default chanview=info)",
        version_text()
    )
}
