// SPDX-License-Identifier: MPL-2.0
//! Liveness token shared between the event producer and the UI thread.
//!
//! The token is a generation counter. Producers stamp every event with the
//! generation current at post time; the consumer only delivers events whose
//! stamp still matches. Advancing the generation discards everything queued
//! so far, and invalidating it (generation 0) discards everything forever.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation value meaning "owner released".
const RELEASED: u64 = 0;

/// First generation handed out by a fresh token.
const FIRST_GENERATION: u64 = 1;

/// Shared generation marker. Cheap to clone; all clones observe the same
/// state.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    generation: Arc<AtomicU64>,
}

impl LivenessToken {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(FIRST_GENERATION)),
        }
    }

    /// Current generation, `0` once released.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Returns true until [`invalidate`](Self::invalidate) was called.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current() != RELEASED
    }

    /// Returns true if an event stamped with `generation` may still be
    /// delivered.
    #[must_use]
    pub fn admits(&self, generation: u64) -> bool {
        generation != RELEASED && generation == self.current()
    }

    /// Starts a new generation, orphaning every event stamped earlier.
    ///
    /// A released token stays released; returns the generation in effect
    /// afterwards.
    pub fn advance(&self) -> u64 {
        match self
            .generation
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current != RELEASED).then(|| current.wrapping_add(1).max(FIRST_GENERATION))
            }) {
            Ok(previous) => previous.wrapping_add(1).max(FIRST_GENERATION),
            Err(_) => RELEASED,
        }
    }

    /// Marks the owner as released. Idempotent.
    pub fn invalidate(&self) {
        self.generation.store(RELEASED, Ordering::Release);
    }
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}
