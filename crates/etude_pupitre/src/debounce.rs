//! Edit debouncing.
//!
//! Each content-change event re-arms a single deadline; only the quiet
//! period after the last event of a burst lets the deadline fire. The
//! debouncer is deterministic (callers pass `Instant`s in), so hosts can
//! drive it from any loop and tests need no timers.

use std::time::{Duration, Instant};

/// Default quiet period before validation runs.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

/// A single re-armable deadline.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// The configured quiet period
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a change event at `now`, re-arming the deadline.
    pub fn note(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Whether a deadline is armed
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the quiet period has elapsed by `now`.
    ///
    /// Fires at most once per burst: a firing poll disarms the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
