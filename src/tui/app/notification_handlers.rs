//! Notification expiry handling for the review TUI.
//!
//! A tick timer armed at startup prunes expired notifications and re-arms
//! itself, so the notification bar clears without user input.

use std::any::Any;
use std::time::{Duration, Instant};

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

/// Interval between notification expiry checks.
pub(super) const NOTIFICATION_TICK_INTERVAL: Duration = Duration::from_millis(250);

impl ReviewApp {
    /// Handles a notification tick: drops expired entries and re-arms the
    /// tick timer.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_notification_tick(&mut self) -> Option<Cmd> {
        let removed = self.notifications.prune(Instant::now());
        if removed > 0 {
            tracing::trace!("expired {removed} notification(s)");
        }
        Some(Self::arm_notification_timer())
    }

    /// Creates a command that emits a notification tick after the tick
    /// interval.
    pub(super) fn arm_notification_timer() -> Cmd {
        Box::pin(async {
            tokio::time::sleep(NOTIFICATION_TICK_INTERVAL).await;
            Some(Box::new(AppMsg::NotificationTick) as Box<dyn Any + Send>)
        })
    }
}
