//! UI components for the review screen TUI.
//!
//! Components are stateless renderers: each takes a view context borrowed
//! from the application state and returns the lines to draw.

mod notification_bar;
mod record_table;
mod text_truncate;

pub use notification_bar::{NotificationBarComponent, NotificationBarViewContext};
pub use record_table::{RecordTableComponent, RecordTableViewContext};
