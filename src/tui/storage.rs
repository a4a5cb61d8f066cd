//! Startup context storage for the review TUI.
//!
//! This module owns the global `OnceLock` holding the seed records and
//! provides the setter/getter functions consumed by CLI wiring and
//! `ReviewApp::init()`, plus the initial terminal size lookup.

use std::io;
use std::sync::OnceLock;

use crossterm::terminal;

use crate::review::Record;

/// Global storage for the seed records.
///
/// This is set before the TUI program starts and read by `ReviewApp::init()`.
static INITIAL_RECORDS: OnceLock<Vec<Record>> = OnceLock::new();

/// Sets the seed records for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The records
/// will be read by `ReviewApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the records were set, `false` if they were already set.
pub fn set_initial_records(records: Vec<Record>) -> bool {
    INITIAL_RECORDS.set(records).is_ok()
}

/// Gets a clone of the seed records from storage.
///
/// Returns an empty collection if none were set. The value is cloned because
/// `OnceLock` does not support taking the value out.
pub(crate) fn get_initial_records() -> Vec<Record> {
    INITIAL_RECORDS.get().cloned().unwrap_or_default()
}

/// Gets the initial terminal dimensions.
///
/// Returns the current terminal size, or 80x24 when it cannot be measured.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    size_or_default(terminal::size())
}

fn size_or_default(measured: io::Result<(u16, u16)>) -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    measured
        .ok()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
