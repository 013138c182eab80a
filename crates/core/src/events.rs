// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change notifications published by the sync core.
//!
//! Events are fire-and-forget and carry no payload: subscribers re-query
//! through the read accessors, which are guaranteed to observe the state
//! the event describes (events publish strictly after the mutation).

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Default channel capacity for an event bus.
const DEFAULT_CAPACITY: usize = 256;

/// A change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CadEvent {
    /// A new snapshot was applied; all derived views must re-derive.
    SyncChanged,
    /// The book-on record changed (booked on, booked off, terminated).
    BookOnChanged,
    /// The booked-on callsign's status changed.
    CallsignChanged,
}

impl CadEvent {
    /// Returns the event type as a string, for logging and filtering.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::SyncChanged => "SyncChanged",
            Self::BookOnChanged => "BookOnChanged",
            Self::CallsignChanged => "CallsignChanged",
        }
    }
}

/// Typed publish/subscribe channel scoped to one service instance.
///
/// Built on `tokio::sync::broadcast`: publishing never blocks, slow
/// subscribers lag rather than stall producers, and receivers clean up
/// when dropped, so there are no dangling observers to unsubscribe.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<CadEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribes to all future events.
    ///
    /// Events emitted before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CadEvent> {
        self.tx.subscribe()
    }

    /// Emits an event to all subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if no subscriber is listening.
    pub fn emit(&self, event: CadEvent) -> Result<usize, broadcast::error::SendError<CadEvent>> {
        self.tx.send(event)
    }

    /// Emits an event, ignoring the no-subscriber case.
    pub fn emit_lossy(&self, event: CadEvent) {
        let _ = self.tx.send(event);
    }

    /// Returns the current number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Returns the configured channel capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
