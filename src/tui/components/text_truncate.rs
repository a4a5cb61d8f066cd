//! Text sizing helpers for fixed-width table cells.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! wide characters occupy two columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Widths of three columns or fewer cannot hold an ellipsis after any text,
/// so they are filled with dots instead.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    format!("{truncated}...")
}

/// Fits text into a cell of exactly `width` columns, truncating with an
/// ellipsis or padding with spaces as needed.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let mut cell = truncate_to_display_width_with_ellipsis(text, width);
    let used = cell.width();
    if used < width {
        cell.push_str(&" ".repeat(width.saturating_sub(used)));
    }
    cell
}
