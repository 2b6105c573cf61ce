// SPDX-License-Identifier: MPL-2.0
//! Click debouncing.
//!
//! Each view owns its own [`Debouncer`]; there is no process-wide state.

use std::time::{Duration, Instant};

/// Suppresses repeated triggers arriving within `interval` of the last
/// accepted one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if the trigger should be ignored.
    pub fn is_fast_click(&mut self) -> bool {
        self.is_fast_click_at(Instant::now())
    }

    /// Same as [`is_fast_click`](Self::is_fast_click) with an explicit clock.
    ///
    /// Rejected triggers do not extend the window.
    pub fn is_fast_click_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.interval {
                return true;
            }
        }
        self.last_accepted = Some(now);
        false
    }

    /// Forgets the last accepted trigger.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
