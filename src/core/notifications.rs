//! Transient notifications ("toasts").

use chrono::{DateTime, TimeDelta, Utc};

/// Lifetime of a notification.
pub const NOTIFICATION_TTL: TimeDelta = TimeDelta::seconds(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

/// Creation-ordered list; every entry expires on its own timer.
#[derive(Debug, Clone)]
pub struct Notifications {
    entries: Vec<Notification>,
    next_id: u64,
    ttl: TimeDelta,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }
}

impl Notifications {
    pub fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            expires_at: now + self.ttl,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.push(message, NotificationKind::Success, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.push(message, NotificationKind::Error, now)
    }

    /// Drop every entry whose timer has elapsed. Returns whether anything
    /// was removed (the screen needs a repaint).
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now);
        self.entries.len() != before
    }

    pub fn visible(&self) -> &[Notification] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
