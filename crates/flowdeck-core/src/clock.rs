//! Injectable clock
//!
//! All time in Flowdeck flows through [`Clock`]: the debounced write-back in
//! `flowdeck-store` and the metric schedule in `flowdeck-sim` compute
//! deadlines against it instead of reading the system clock directly. Tests
//! drive a [`ManualClock`] to advance virtual time deterministically.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// Wall-clock instant used for timestamps and deadlines
pub type Timestamp = DateTime<Utc>;

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Timestamp;
}

/// Real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Hand-advanced clock for deterministic tests
///
/// Cloning yields a handle onto the same underlying instant, so a clock can
/// be shared between the component under test and the test itself.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<Timestamp>>,
}

impl ManualClock {
    /// Create a manual clock starting at the given instant
    #[must_use]
    pub fn starting_at(start: Timestamp) -> Self {
        Self {
            inner: Arc::new(Mutex::new(start)),
        }
    }

    /// Create a manual clock starting at the unix epoch
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Advance the clock by a duration
    pub fn advance(&self, by: Duration) {
        let mut guard = self.inner.lock();
        *guard += by;
    }

    /// Advance the clock by whole milliseconds
    pub fn advance_millis(&self, millis: i64) {
        self.advance(Duration::milliseconds(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.inner.lock()
    }
}
