//! Short-lived toasts for session notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::core::constants::MAX_VISIBLE_TOASTS;
use crate::core::notification::Notification;

#[derive(Debug, Clone, Copy)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Queue of toasts that expire on their own after a fixed duration.
#[derive(Debug)]
pub struct ToastCenter {
    duration: Duration,
    toasts: VecDeque<Toast>,
}

impl ToastCenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            toasts: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.toasts.push_back(Toast {
            notification,
            shown_at: now,
        });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop expired toasts. Returns true when anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        let duration = self.duration;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < duration);
        self.toasts.len() != before
    }

    /// Live toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notification::NotificationKind;

    #[test]
    fn toasts_expire_after_duration() {
        let start = Instant::now();
        let mut center = ToastCenter::new(Duration::from_secs(4));
        center.push(NotificationKind::ChatCleared.into(), start);

        assert!(!center.prune(start + Duration::from_secs(3)));
        assert!(!center.is_empty());

        assert!(center.prune(start + Duration::from_secs(4)));
        assert!(center.is_empty());
    }

    #[test]
    fn newest_toast_is_listed_first_and_stack_is_capped() {
        let now = Instant::now();
        let mut center = ToastCenter::new(Duration::from_secs(4));
        center.push(NotificationKind::NewChatStarted.into(), now);
        center.push(NotificationKind::ChatCleared.into(), now);
        center.push(NotificationKind::BackendUnavailable.into(), now);
        center.push(NotificationKind::ChatCleared.into(), now);

        let kinds: Vec<_> = center.visible().map(|t| t.notification.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NotificationKind::ChatCleared,
                NotificationKind::BackendUnavailable,
                NotificationKind::ChatCleared,
            ]
        );
    }
}
