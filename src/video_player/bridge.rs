// SPDX-License-Identifier: MPL-2.0
//! Event bridge between the engine's worker threads and the UI thread.
//!
//! Engine threads hold an [`EventPoster`] and push events into a channel.
//! The UI thread owns the [`EventBridge`] and drains it with
//! [`EventBridge::process_pending`], delivering events one at a time in
//! posting order to the registered listeners.
//!
//! Every event is stamped with the [`LivenessToken`] generation current at
//! post time. Events whose stamp no longer matches when they are drained
//! (the bridge was reset or released in between) are dropped instead of
//! delivered.

use std::collections::HashMap;
use std::fmt;

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::events::{Decoded, EventKind, PlayerEvent};
use super::liveness::LivenessToken;

/// An event together with the generation it was posted under.
#[derive(Debug, Clone)]
struct Envelope {
    generation: u64,
    event: PlayerEvent,
}

/// Handle for posting engine events from any thread.
///
/// Cheap to clone. Posting never blocks.
#[derive(Clone, Debug)]
pub struct EventPoster {
    event_tx: Sender<Envelope>,
    token: LivenessToken,
}

impl EventPoster {
    /// Queues an event for the UI thread.
    ///
    /// Returns false if the owning view was already released, in which case
    /// the event is dropped.
    pub fn post(&self, event: PlayerEvent) -> bool {
        let generation = self.token.current();
        if !self.token.admits(generation) {
            tracing::warn!(?event, "event posted after release, dropping");
            return false;
        }
        self.event_tx.send(Envelope { generation, event }).is_ok()
    }

    /// Decodes and queues a native `what/arg1/arg2` message.
    ///
    /// Interface tests and timed text are swallowed; unknown codes are
    /// logged and dropped.
    pub fn post_raw(&self, what: i32, arg1: i32, arg2: i32, obj: Option<&str>) -> bool {
        match PlayerEvent::decode(what, arg1, arg2, obj) {
            Decoded::Event(event) => self.post(event),
            Decoded::Ignored(_) => false,
            Decoded::Unknown(code) => {
                tracing::warn!(code, "unknown engine message type");
                false
            }
        }
    }

    /// Returns true while the owning view has not been released.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.token.is_alive()
    }
}

/// Callback invoked on the UI thread for each delivered event.
pub type Listener = Box<dyn FnMut(&PlayerEvent)>;

/// Delivery counters, mostly useful in tests and debug logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    pub delivered: u64,
    pub dropped: u64,
}

/// UI-thread side of the bridge: queue, listener registry and token.
pub struct EventBridge {
    event_rx: Receiver<Envelope>,
    event_tx: Sender<Envelope>,
    token: LivenessToken,
    listeners: HashMap<EventKind, Listener>,
    stats: BridgeStats,
}

impl fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBridge")
            .field("generation", &self.token.current())
            .field("pending", &self.event_rx.len())
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .field("stats", &self.stats)
            .finish()
    }
}

impl EventBridge {
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            event_rx,
            event_tx,
            token: LivenessToken::new(),
            listeners: HashMap::new(),
            stats: BridgeStats::default(),
        }
    }

    /// Creates a poster for engine threads.
    #[must_use]
    pub fn poster(&self) -> EventPoster {
        EventPoster {
            event_tx: self.event_tx.clone(),
            token: self.token.clone(),
        }
    }

    #[must_use]
    pub fn token(&self) -> &LivenessToken {
        &self.token
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        !self.token.is_alive()
    }

    #[must_use]
    pub fn stats(&self) -> BridgeStats {
        self.stats
    }

    /// Number of events waiting to be drained.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.event_rx.len()
    }

    /// Registers the listener for `kind`, replacing any previous one.
    /// Passing `None` clears the slot.
    pub fn set_listener(&mut self, kind: EventKind, listener: Option<Listener>) {
        match listener {
            Some(listener) => {
                self.listeners.insert(kind, listener);
            }
            None => {
                self.listeners.remove(&kind);
            }
        }
    }

    /// Convenience wrapper around [`set_listener`](Self::set_listener).
    pub fn on<F>(&mut self, kind: EventKind, listener: F)
    where
        F: FnMut(&PlayerEvent) + 'static,
    {
        self.set_listener(kind, Some(Box::new(listener)));
    }

    #[must_use]
    pub fn has_listener(&self, kind: EventKind) -> bool {
        self.listeners.contains_key(&kind)
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Drains the queue, handing each live event to `route` first and then
    /// to the registered listener of its kind.
    ///
    /// Returns the number of delivered events.
    pub fn process_pending<F>(&mut self, mut route: F) -> usize
    where
        F: FnMut(&PlayerEvent),
    {
        let mut delivered = 0;
        while let Ok(envelope) = self.event_rx.try_recv() {
            if !self.token.admits(envelope.generation) {
                tracing::debug!(
                    event = ?envelope.event,
                    generation = envelope.generation,
                    "dropping stale event"
                );
                self.stats.dropped += 1;
                continue;
            }
            route(&envelope.event);
            if let Some(listener) = self.listeners.get_mut(&envelope.event.kind()) {
                listener(&envelope.event);
            }
            self.stats.delivered += 1;
            delivered += 1;
        }
        delivered
    }

    /// Drains the queue delivering only to registered listeners.
    pub fn dispatch_pending(&mut self) -> usize {
        self.process_pending(|_| {})
    }

    /// Orphans every queued event; they are dropped when drained.
    pub fn reset(&mut self) {
        let generation = self.token.advance();
        tracing::debug!(generation, "event bridge reset");
    }

    /// Clears all listeners, then invalidates the token and discards the
    /// queue. Idempotent.
    pub fn release(&mut self) {
        self.clear_listeners();
        if !self.token.is_alive() {
            return;
        }
        self.token.invalidate();
        let discarded = self.event_rx.try_iter().count();
        self.stats.dropped += discarded as u64;
        tracing::debug!(discarded, "event bridge released");
    }
}

impl Default for EventBridge {
    fn default() -> Self {
        Self::new()
    }
}
