#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fixed-interval tick gate that decouples the simulation rate from the
//! render/poll rate.
//!
//! The render loop polls [`TickScheduler::triggered`] every frame; the gate
//! admits exactly one simulation step per elapsed interval regardless of how
//! often it is polled. Time is supplied by the caller so tests drive the gate
//! with synthetic instants instead of sleeping.

use std::time::{Duration, Instant};

/// Stateful gate that admits at most one simulation step per interval.
#[derive(Clone, Copy, Debug)]
pub struct TickScheduler {
    interval: Duration,
    last_fired: Instant,
}

impl TickScheduler {
    /// Creates a gate that first fires one interval after `now`.
    #[must_use]
    pub const fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_fired: now,
        }
    }

    /// Admits a simulation step when a full interval has elapsed since the
    /// last admission, resetting the gate. Rejections leave the gate
    /// untouched, so polling frequency never changes the admission rate.
    pub fn triggered(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fired) >= self.interval {
            self.last_fired = now;
            return true;
        }
        false
    }

    /// Interval between admitted steps.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
