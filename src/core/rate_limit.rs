//! Interval rate limiter for market price requests.
//!
//! The Steam market throttles aggressively, so price lookups are spaced out. The limiter
//! hands out one permit per interval, and the first permit only becomes available one
//! interval after construction. It sleeps on `tokio::time`, so tests can run it under a
//! paused clock.

use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Hands out at most one permit per `interval`.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    next_permit: Instant,
}

impl RateLimiter {
    /// Creates a limiter whose first permit is due one `interval` from now.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_permit: Instant::now() + interval,
        }
    }

    /// Waits until the next permit is due and reserves it.
    pub async fn acquire(&mut self) {
        let due = self.next_permit.max(Instant::now());
        sleep_until(due).await;
        self.next_permit = due + self.interval;
    }
}
