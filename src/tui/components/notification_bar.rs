//! Single-line notification bar.
//!
//! The bar always occupies one line so the layout does not shift when a
//! notification appears or expires.

use crate::tui::state::Notification;

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Context for rendering the notification bar.
#[derive(Debug, Clone, Copy)]
pub struct NotificationBarViewContext<'a> {
    /// Notification to show, if any is active.
    pub notification: Option<&'a Notification>,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component for displaying the current notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationBarComponent;

impl NotificationBarComponent {
    /// Renders the bar: the notification's title and body, or a blank line.
    #[must_use]
    pub fn view(ctx: &NotificationBarViewContext<'_>) -> String {
        let Some(notification) = ctx.notification else {
            return "\n".to_owned();
        };

        let text = format!("» {}: {}", notification.title(), notification.body());
        format!(
            "{}\n",
            truncate_to_display_width_with_ellipsis(&text, ctx.max_width)
        )
    }
}
