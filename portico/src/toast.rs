//! Auto-expiring notifications.

use std::time::{Duration, Instant};

use log::info;
use serde::{Deserialize, Serialize};

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4500);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    /// Neutral information.
    #[default]
    Info,
    /// Something completed.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text shown to the user.
    pub message: String,
    /// Severity.
    pub level: ToastLevel,
    /// How long to show the toast.
    pub duration: Duration,
}

impl Toast {
    /// Create a toast with the default duration.
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    /// Create a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    /// Create an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

/// Toasts currently on screen, with their expiry times.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    active: Vec<(Toast, Instant)>,
}

impl ToastQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast from `now` until its duration elapses.
    pub fn show(&mut self, toast: impl Into<Toast>, now: Instant) {
        let toast = toast.into();
        info!("Toast ({:?}): {}", toast.level, toast.message);
        let expires_at = now + toast.duration;
        self.active.push((toast, expires_at));
    }

    /// Remove and return every toast that has expired by `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<Toast> {
        let (expired, active): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|(_, expires_at)| *expires_at <= now);
        self.active = active;
        expired.into_iter().map(|(toast, _)| toast).collect()
    }

    /// Toasts still on screen, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter().map(|(toast, _)| toast)
    }

    /// Number of toasts on screen.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// True if nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Earliest expiry among active toasts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.iter().map(|(_, expires_at)| *expires_at).min()
    }
}
