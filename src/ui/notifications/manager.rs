// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! At most one banner is visible. Pushing a new notification replaces the
//! current one and restarts the auto-dismiss countdown.

use super::notification::{Notification, NotificationId, Severity, Shown};
use crate::config::DEFAULT_NOTIFICATION_DISMISS_MS;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

#[derive(Debug)]
pub struct Manager {
    current: Option<Shown>,
    lifetime: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_DISMISS_MS))
    }
}

impl Manager {
    /// Creates an empty manager whose banners stay up for `lifetime`.
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    /// Shows `notification`, replacing any visible banner.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        match notification.severity() {
            Severity::Error => {
                tracing::warn!(key = notification.message_key(), "error notification");
            }
            Severity::Info | Severity::Success => {
                tracing::debug!(key = notification.message_key(), "notification");
            }
        }
        self.current = Some(Shown::new(notification, now, self.lifetime));
    }

    /// Dismisses the banner if it carries `id`.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|shown| shown.notification.id() == id)
        {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Removes the banner once its countdown has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|shown| shown.is_expired(now)) {
            self.current = None;
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|shown| &shown.notification)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|shown| shown.dismiss_at)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert!(!manager.has_notifications());
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn new_banner_replaces_visible_one() {
        let now = Instant::now();
        let mut manager = Manager::default();
        manager.push(Notification::info("first"), now);
        manager.push(Notification::error("second"), now + ms(100));

        let current = manager.current().expect("banner visible");
        assert_eq!(current.message_key(), "second");
        assert_eq!(manager.next_deadline(), Some(now + ms(100) + ms(8000)));
    }

    #[test]
    fn banner_auto_dismisses_after_lifetime() {
        let now = Instant::now();
        let mut manager = Manager::default();
        manager.push(Notification::success("sent"), now);

        manager.tick(now + ms(7999));
        assert!(manager.has_notifications());

        manager.tick(now + ms(8000));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_ignores_replaced_banner() {
        let now = Instant::now();
        let mut manager = Manager::default();
        let first = Notification::info("first");
        let first_id = first.id();
        manager.push(first, now);
        manager.push(Notification::info("second"), now);

        assert!(!manager.dismiss(first_id));
        assert!(manager.has_notifications());
    }

    #[test]
    fn handle_message_dismiss() {
        let now = Instant::now();
        let mut manager = Manager::new(ms(1000));
        let notification = Notification::error("oops");
        let id = notification.id();
        manager.push(notification, now);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
