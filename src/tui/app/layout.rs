//! Layout helpers for the review TUI model.
//!
//! This module encapsulates body height calculations and the scroll window
//! that keeps the selected row on screen.

use super::ReviewApp;

/// Layout rows reserved for header, filter bar, separator newline,
/// notification bar, and status bar.
pub(super) const CHROME_HEIGHT: usize = 5;
/// Minimum body rows, ensuring at least one row is visible even when the
/// terminal height is very small.
pub(super) const MIN_BODY_HEIGHT: usize = 1;

impl ReviewApp {
    /// Rows available to the section tables.
    pub(super) const fn body_height(&self) -> usize {
        let available = (self.height as usize).saturating_sub(CHROME_HEIGHT);
        if available < MIN_BODY_HEIGHT {
            MIN_BODY_HEIGHT
        } else {
            available
        }
    }
}

/// Returns the first line of a `height`-line window over `total` lines
/// that keeps line `focus` visible.
///
/// The window stays at the top until the focus would fall below it, then
/// scrolls just far enough to show the focus on the last visible line.
pub(super) const fn window_start(total: usize, focus: Option<usize>, height: usize) -> usize {
    let Some(focus_line) = focus else {
        return 0;
    };
    if height == 0 || total <= height {
        return 0;
    }

    let start = focus_line.saturating_add(1).saturating_sub(height);
    let max_start = total.saturating_sub(height);
    if start < max_start { start } else { max_start }
}
