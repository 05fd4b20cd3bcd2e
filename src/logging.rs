//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to a file. Filtering uses
//! `RUST_LOG` when set, otherwise `chanview=info`.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "chanview=info";

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`.
///
/// Returns `false` and leaves logging disabled when `path` is `None`, the
/// file cannot be opened, or a subscriber is already installed.
pub fn init_logging(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(layer)
        .with(env_filter())
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("chanview {} starting", env!("CARGO_PKG_VERSION"));
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chanview.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_init_logging_without_path() {
        assert!(!init_logging(None));
    }

    #[test]
    fn test_init_logging_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        // A regular file cannot be a parent directory.
        assert!(!init_logging(Some(&blocker.join("chanview.log"))));
    }
}
