//! Most-recent-wins debouncing.
//!
//! [`Debounce`] is a plain state machine driven by an explicit clock, for
//! callers that own their event loop. [`DebouncedTask`] runs the same policy
//! as a tokio task that is aborted and respawned on every new input.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;

/// Default quiet period before a debounced action fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Clock-driven debouncer holding at most one pending value.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new input, replacing and restarting any pending one.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// When the pending value will fire, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Whether a value is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// Debouncer backed by a tokio task.
///
/// Each [`schedule`](Self::schedule) aborts the previous task, so only the
/// latest action runs, `delay` after it was scheduled. Must be used from
/// within a tokio runtime.
#[derive(Debug)]
pub struct DebouncedTask {
    delay: Duration,
    handle: Option<JoinHandle<()>>,
}

impl DebouncedTask {
    /// Create a task debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            handle: None,
        }
    }

    /// Schedule `action`, cancelling whatever was pending.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_async(async move { action() });
    }

    /// Schedule a future to run after the quiet period, cancelling whatever
    /// was pending.
    pub fn schedule_async<Fut>(&mut self, action: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Abort the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether an action is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebouncedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_input_wins() {
        let start = Instant::now();
        let mut debounce = Debounce::new(Duration::from_millis(500));
        debounce.push("first", start);
        debounce.push("second", start + Duration::from_millis(100));

        assert_eq!(debounce.poll(start + Duration::from_millis(500)), None);
        assert_eq!(debounce.poll(start + Duration::from_millis(599)), None);
        assert_eq!(debounce.poll(start + Duration::from_millis(600)), Some("second"));
        assert_eq!(debounce.poll(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debounce = Debounce::default();
        debounce.push(1, start);
        assert_eq!(debounce.deadline(), Some(start + DEFAULT_DEBOUNCE));
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(start + Duration::from_secs(1)), None);
    }
}
