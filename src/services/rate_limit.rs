use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Process-wide minimum interval between accepted requests.
///
/// Holds the last accept time behind a lock so concurrent callers observe a
/// consistent window. Best-effort by design: there is no queueing, a
/// rejected caller simply learns how long to wait.
pub struct RateLimiter {
    min_interval: Duration,
    last_accepted: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: Mutex::new(None),
        }
    }

    /// Records the accept time and returns `Ok`, or returns the remaining
    /// wait without touching the window.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        self.try_acquire_at(Instant::now())
    }

    /// Clock-passing variant so tests can drive the window deterministically.
    pub fn try_acquire_at(&self, now: Instant) -> Result<(), Duration> {
        let mut last = self
            .last_accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(previous) = *last {
            let elapsed = now.saturating_duration_since(previous);
            if elapsed < self.min_interval {
                return Err(self.min_interval - elapsed);
            }
        }

        *last = Some(now);
        Ok(())
    }
}
