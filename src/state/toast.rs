//! Short-lived success notifications.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// A message shown until its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    expires_at: Instant,
}

impl Toast {
    /// Toast showing `message` from `now`.
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        }
    }

    /// Text shown.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True once the display time has passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Toasts currently shown, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    /// No toasts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` from `now`, replacing the current one.
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.items.push(Toast::new(message, now));
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| !t.is_expired(now));
    }

    /// Most recent toast, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.items.last()
    }

    /// True when nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
