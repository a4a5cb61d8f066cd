//! State management for the review screen TUI.
//!
//! This module provides the screen state machine ([`ReviewScreen`]) and the
//! smaller state types it is built from: filter criteria, cursor position,
//! the inline edit session, notifications, and enrich-all bookkeeping.

mod cursor;
mod edit_session;
mod enrichment;
mod filter_state;
mod notifications;
mod rows;
mod screen;
mod variant;

pub use cursor::CursorState;
pub use edit_session::{EditField, EditSession};
pub use enrichment::{EnrichmentRuns, EnrichmentToken};
pub use filter_state::{FilterState, StatusFilter};
pub use notifications::{
    DEFAULT_NOTIFICATION_TTL, Notice, Notification, NotificationId, NotificationQueue,
};
pub use rows::{Row, RowAction, Section, available_actions};
pub use screen::ReviewScreen;
pub use variant::ScreenVariant;
