//! Debouncer - latest-wins delay in front of backend queries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delays values and lets only the most recent one through.
///
/// Every call to [`settle`](Debouncer::settle) takes a ticket and sleeps for
/// the quiet period. A call returns its value only if no later call took a
/// ticket meanwhile, so a burst of keystrokes produces one query.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the quiet period. Returns `None` if superseded.
    pub async fn settle<T>(&self, value: T) -> Option<T> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        (self.generation.load(Ordering::SeqCst) == ticket).then_some(value)
    }

    /// Supersedes every pending call.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
