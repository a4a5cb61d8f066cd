//! Cursor position over the rows of all visible sections.
//!
//! The cursor is a plain index into the row list computed for the current
//! frame. It is clamped whenever the row count may have changed, so it never
//! points past the end.

/// Cursor position within the combined row list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Current cursor position (0-indexed).
    pub position: usize,
}

impl CursorState {
    /// Clamps the cursor to `count` rows.
    ///
    /// An empty list parks the cursor at zero.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by `step` rows, stopping at the first row.
    pub const fn up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor down by `step` rows, stopping at `max_index`.
    pub const fn down(&mut self, step: usize, max_index: usize) {
        let target = self.position.saturating_add(step);
        self.position = if target < max_index { target } else { max_index };
    }

    /// Moves the cursor to the first row.
    pub const fn home(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor to the last row.
    pub const fn end(&mut self, max_index: usize) {
        self.position = max_index;
    }
}
