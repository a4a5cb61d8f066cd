//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update logic for the
//! review screen TUI. It owns the [`ReviewScreen`] state machine, the cursor,
//! the notification queue, and the timers that drive notification expiry
//! and the enrich-all placeholder.
//!
//! # Module Structure
//!
//! - `routing`: Input-mode routing and category dispatch
//! - `navigation`: Cursor movement handlers
//! - `filter_handlers`: Status filter and search handlers
//! - `status_handlers`: Reclassify handlers
//! - `edit_handlers`: Inline edit handlers
//! - `enrich_handlers`: Enrich-all timer handling
//! - `notification_handlers`: Notification expiry tick
//! - `lifecycle_handlers`: Startup, resize, quit, and help
//! - `rendering`: View rendering methods for terminal output
//! - `layout`: Body height and scroll window calculations
//! - `model_impl`: `bubbletea_rs::Model` implementation

use std::time::{Duration, Instant};

use crate::review::{Record, RecordId};

use super::ScreenSettings;
use super::state::{
    CursorState, EnrichmentRuns, Notice, Notification, NotificationQueue, ReviewScreen, Row,
};

mod edit_handlers;
mod enrich_handlers;
mod filter_handlers;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod notification_handlers;
mod rendering;
mod routing;
mod status_handlers;

/// Main application model for the review screen TUI.
#[derive(Debug)]
pub struct ReviewApp {
    /// Records, filter, and edit session.
    pub(crate) screen: ReviewScreen,
    /// Pending and visible notifications.
    pub(crate) notifications: NotificationQueue,
    /// Cursor over the rows of all visible sections.
    pub(crate) cursor: CursorState,
    /// Whether typed keys edit the search query.
    pub(crate) search_active: bool,
    /// Outstanding enrich-all runs.
    pub(crate) enrichment: EnrichmentRuns,
    /// Delay before an enrich-all run completes.
    enrich_delay: Duration,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Tracks whether startup initialisation has already run.
    has_initialized: bool,
}

impl ReviewApp {
    /// Creates a new application over `records` with default settings.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_settings(records, ScreenSettings::default())
    }

    /// Creates a new application over `records` with the given settings.
    #[must_use]
    pub fn with_settings(records: Vec<Record>, settings: ScreenSettings) -> Self {
        Self {
            screen: ReviewScreen::new(records, settings.variant),
            notifications: NotificationQueue::new(settings.notification_ttl),
            cursor: CursorState::default(),
            search_active: false,
            enrichment: EnrichmentRuns::default(),
            enrich_delay: settings.enrich_delay,
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
        }
    }

    /// Creates an application with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the application with the given terminal dimensions.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Screen state: records, filter, and edit session.
    #[must_use]
    pub const fn screen(&self) -> &ReviewScreen {
        &self.screen
    }

    /// Selectable rows in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.screen.rows()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Returns the row under the cursor, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<Row> {
        self.rows().get(self.cursor.position).copied()
    }

    /// Returns the record under the cursor, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        self.selected_row()
            .and_then(|row| self.screen.record(row.record_id))
    }

    /// Moves the cursor to the first row showing record `id`.
    ///
    /// Returns `false` if no visible row shows that record.
    pub fn select_record(&mut self, id: RecordId) -> bool {
        self.rows()
            .iter()
            .position(|row| row.record_id == id)
            .map(|index| self.cursor.position = index)
            .is_some()
    }

    /// Returns true while typed keys edit the search query.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.search_active
    }

    /// The notification queue.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// The notification to show at `now`.
    #[must_use]
    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notifications.current(now)
    }

    /// The notification to show right now.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notification_at(Instant::now())
    }

    /// Queues a notice, stamped with the current instant.
    pub(crate) fn notify(&mut self, notice: Notice) {
        tracing::debug!("notification: {}: {}", notice.title, notice.body);
        let _ = self.notifications.push(notice, Instant::now());
    }

    /// Clamps the cursor to the current row count.
    ///
    /// Call this after anything that can change which rows are visible.
    pub(crate) fn clamp_cursor(&mut self) {
        let count = self.rows().len();
        self.cursor.clamp(count);
    }
}
