//! Transient notifications with explicit expiry instants.
//!
//! Screen operations produce [`Notice`] values; the application stamps each
//! one with an expiry and pushes it onto a [`NotificationQueue`]. Callers
//! always pass "now" in, which keeps ordering and dismissal deterministic.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default time a notification stays visible.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(3_000);

/// Title and body of a notification, before it is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short heading.
    pub title: String,
    /// Descriptive text.
    pub body: String,
}

impl Notice {
    /// Creates a notice.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Confirmation shown after an inline edit is saved.
    #[must_use]
    pub fn contact_updated() -> Self {
        Self::new("Contact Updated", "Contact details have been saved")
    }

    /// Shown as soon as enrich-all is triggered.
    #[must_use]
    pub fn enrichment_started() -> Self {
        Self::new("Enrichment Started", "Enriching accepted contacts...")
    }

    /// Shown once the enrich-all delay has elapsed.
    #[must_use]
    pub fn enrichment_complete() -> Self {
        Self::new("Enrichment Complete", "Accepted contacts have been enriched")
    }
}

/// Monotonic identifier of a queued notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

/// A scheduled notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    notice: Notice,
    expires_at: Instant,
}

impl Notification {
    /// Identifier assigned when the notification was queued.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Heading text.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.notice.title.as_str()
    }

    /// Body text.
    #[must_use]
    pub const fn body(&self) -> &str {
        self.notice.body.as_str()
    }

    /// Instant at which the notification disappears.
    #[must_use]
    pub const fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Returns true while `now` is before the expiry instant.
    #[must_use]
    pub fn is_active_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Queue of notifications in the order they were raised.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl NotificationQueue {
    /// Creates an empty queue whose entries live for `ttl`.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 0,
            ttl,
        }
    }

    /// Lifetime given to each new entry.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Queues `notice`, expiring `ttl` after `now`.
    pub fn push(&mut self, notice: Notice, now: Instant) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push_back(Notification {
            id,
            notice,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Drops every entry that has expired at `now`, returning how many
    /// were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.is_active_at(now));
        before.saturating_sub(self.entries.len())
    }

    /// The notification to display at `now`: the newest active entry.
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<&Notification> {
        self.entries.iter().rev().find(|entry| entry.is_active_at(now))
    }

    /// All queued entries, oldest first, including any not yet pruned.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of queued entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(3_000);

    #[test]
    fn pushed_notification_is_current_until_expiry() {
        let mut queue = NotificationQueue::new(TTL);
        let start = Instant::now();

        queue.push(Notice::new("Status Updated", "John Doe has been accepted"), start);

        let current = queue.current(start).expect("notification should be active");
        assert_eq!(current.body(), "John Doe has been accepted");
        assert_eq!(current.expires_at(), start + TTL);
        assert!(queue.current(start + TTL - Duration::from_millis(1)).is_some());
        assert!(queue.current(start + TTL).is_none());
    }

    #[test]
    fn newest_active_notification_wins() {
        let mut queue = NotificationQueue::new(TTL);
        let start = Instant::now();

        queue.push(Notice::new("A", "first"), start);
        queue.push(Notice::new("B", "second"), start + Duration::from_millis(500));

        assert_eq!(queue.current(start + Duration::from_secs(1)).map(Notification::title), Some("B"));
    }

    #[test]
    fn prune_removes_only_expired_entries() {
        let mut queue = NotificationQueue::new(TTL);
        let start = Instant::now();
        queue.push(Notice::new("A", "first"), start);
        queue.push(Notice::new("B", "second"), start + Duration::from_secs(2));

        let removed = queue.prune(start + Duration::from_secs(3));

        assert_eq!(removed, 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(Notification::title), Some("B"));

        assert_eq!(queue.prune(start + Duration::from_secs(5)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn ids_increase_in_push_order() {
        let mut queue = NotificationQueue::default();
        let now = Instant::now();

        let first = queue.push(Notice::contact_updated(), now);
        let second = queue.push(Notice::enrichment_started(), now);

        assert!(first < second);
        assert_eq!(queue.ttl(), DEFAULT_NOTIFICATION_TTL);
    }
}
