//! Discrete countdown driving dynamic safe-zone spawns.
//!
//! The engine never reads a clock. The host forwards one tick per elapsed
//! second; the timer counts down and reports when the interval expired.

use serde::{Deserialize, Serialize};

/// Cancellable interval countdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeZoneTimer {
    interval: u32,
    remaining: u32,
    stopped: bool,
}

impl SafeZoneTimer {
    /// Create a running timer with a full countdown.
    #[must_use]
    pub fn new(interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            remaining: interval,
            stopped: false,
        }
    }

    /// Restore a timer at a specific countdown value.
    #[must_use]
    pub fn resume_at(interval: u32, remaining: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            remaining: remaining.clamp(1, interval),
            stopped: false,
        }
    }

    /// Seconds left before the next spawn.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Configured interval.
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Whether the timer was cancelled.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance by one tick. Returns true when the interval expired; the
    /// countdown restarts automatically.
    pub fn tick(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        if self.remaining <= 1 {
            self.remaining = self.interval;
            true
        } else {
            self.remaining -= 1;
            false
        }
    }

    /// Cancel the timer. A stopped timer never fires again.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
