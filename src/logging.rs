//! Diagnostic logging setup.
//!
//! The terminal belongs to the TUI, so logs are only written when a log file
//! is configured. Verbosity follows `RUST_LOG` and defaults to `info`.

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use tracing_subscriber::EnvFilter;

use crate::error::TriageError;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Installs a global `tracing` subscriber appending to `path`.
///
/// Returns `Ok(false)` if another subscriber was already installed, in
/// which case the existing one is kept.
///
/// # Errors
///
/// Returns [`TriageError::Io`] when the log file cannot be opened.
pub fn init_file_logging(path: &Utf8Path) -> Result<bool, TriageError> {
    let file_name = path.file_name().ok_or_else(|| TriageError::Io {
        message: format!("log path '{path}' has no file name"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        TriageError::Io {
            message: format!("failed to open log directory '{parent}': {error}"),
        }
    })?;
    let file = dir
        .open_with(file_name, OpenOptions::new().create(true).append(true))
        .map_err(|error| TriageError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file.into_std()))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("logging to '{path}'");
    }
    Ok(installed)
}
