// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The snapshot store: atomic replacement, request coalescing and
//! supersession of stale refreshes.

use crate::error::SyncError;
use crate::events::{CadEvent, EventBus};
use crate::snapshot::Snapshot;
use cad_transport::{CadTransport, SyncRequest};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, warn};

/// The shared future of one in-flight refresh attempt.
///
/// `Shared` lets every caller that joins an in-flight refresh await the
/// same transport fetch and observe the same result.
type SharedRefresh = Shared<BoxFuture<'static, Result<Arc<Snapshot>, SyncError>>>;

/// Holds the current immutable snapshot and replaces it atomically.
///
/// Reads (`current`, lookups through the returned snapshot) are safe from
/// any thread at any time, including during an in-flight refresh: the
/// swap is a single pointer replacement and snapshots are never mutated
/// once published.
///
/// Refreshes are coalesced: a `refresh` call while one is in flight joins
/// it rather than issuing a second fetch. `refresh_now` instead starts a
/// new attempt that supersedes the in-flight one; generation stamping
/// guarantees a late result can never clobber a newer one.
///
/// Failed refreshes leave the previous snapshot untouched and return the
/// error to the caller. Retry policy belongs to the caller.
pub struct SnapshotStore {
    transport: Arc<dyn CadTransport>,
    events: EventBus,
    current: RwLock<Arc<Snapshot>>,
    inflight: Mutex<Option<SharedRefresh>>,
    /// Generation handed to the most recently started attempt.
    started_generation: AtomicU64,
    /// Generation of the attempt whose snapshot is currently applied.
    applied_generation: AtomicU64,
    last_sync_time: RwLock<Option<chrono::DateTime<chrono::Utc>>>,
}

impl SnapshotStore {
    /// Creates a store serving an empty snapshot until the first refresh.
    #[must_use]
    pub fn new(transport: Arc<dyn CadTransport>, events: EventBus) -> Arc<Self> {
        Arc::new(Self {
            transport,
            events,
            current: RwLock::new(Arc::new(Snapshot::default())),
            inflight: Mutex::new(None),
            started_generation: AtomicU64::new(0),
            applied_generation: AtomicU64::new(0),
            last_sync_time: RwLock::new(None),
        })
    }

    /// Returns the last good snapshot. Never blocks on a refresh.
    #[must_use]
    pub fn current(&self) -> Arc<Snapshot> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Returns when the last successful refresh was applied.
    #[must_use]
    pub fn last_sync_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        *self
            .last_sync_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Refreshes the snapshot, coalescing with any in-flight refresh.
    ///
    /// Concurrent callers share one transport fetch and observe the same
    /// resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns the transport failure of the attempt; the previous
    /// snapshot is retained unchanged.
    pub async fn refresh(self: &Arc<Self>, request: SyncRequest) -> Result<Arc<Snapshot>, SyncError> {
        let attempt: SharedRefresh = {
            let mut slot = self
                .inflight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = slot.as_ref() {
                debug!("joining in-flight refresh");
                existing.clone()
            } else {
                let attempt: SharedRefresh = self.start_attempt(request);
                *slot = Some(attempt.clone());
                attempt
            }
        };
        attempt.await
    }

    /// Refreshes the snapshot, superseding any in-flight refresh.
    ///
    /// Used when the sync scope changes and the in-flight result would
    /// describe the wrong scope. The superseded attempt still completes
    /// for its callers, but its result can no longer be applied.
    ///
    /// # Errors
    ///
    /// Returns the transport failure of the new attempt; the previous
    /// snapshot is retained unchanged.
    pub async fn refresh_now(
        self: &Arc<Self>,
        request: SyncRequest,
    ) -> Result<Arc<Snapshot>, SyncError> {
        let attempt: SharedRefresh = {
            let mut slot = self
                .inflight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let attempt: SharedRefresh = self.start_attempt(request);
            *slot = Some(attempt.clone());
            attempt
        };
        attempt.await
    }

    /// Stamps a new attempt with the next generation and boxes it for
    /// sharing. Callers must hold the in-flight lock.
    fn start_attempt(self: &Arc<Self>, request: SyncRequest) -> SharedRefresh {
        let generation: u64 = self.started_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let store: Arc<Self> = Arc::clone(self);
        async move { store.run_attempt(generation, request).await }
            .boxed()
            .shared()
    }

    /// Fetches, builds and (when still the newest attempt) applies one
    /// snapshot.
    async fn run_attempt(
        self: Arc<Self>,
        generation: u64,
        request: SyncRequest,
    ) -> Result<Arc<Snapshot>, SyncError> {
        let fetched = self.transport.fetch_snapshot(&request).await;
        self.clear_inflight(generation);

        let payload = match fetched {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "snapshot refresh failed; retaining previous snapshot");
                return Err(SyncError::from(err));
            }
        };

        let snapshot: Arc<Snapshot> = Arc::new(Snapshot::build(payload));

        let applied: bool = {
            let mut current = self
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if generation > self.applied_generation.load(Ordering::SeqCst) {
                *current = Arc::clone(&snapshot);
                self.applied_generation.store(generation, Ordering::SeqCst);
                true
            } else {
                false
            }
        };

        if applied {
            *self
                .last_sync_time
                .write()
                .unwrap_or_else(PoisonError::into_inner) = Some(chrono::Utc::now());
            // Published strictly after the swap: an observer that reads
            // current() on receipt sees the new snapshot.
            self.events.emit_lossy(CadEvent::SyncChanged);
            debug!(
                generation,
                incidents = snapshot.incidents().len(),
                resources = snapshot.resources().len(),
                "snapshot applied"
            );
            Ok(snapshot)
        } else {
            debug!(generation, "superseded refresh discarded");
            Ok(self.current())
        }
    }

    /// Clears the in-flight slot unless a newer attempt has replaced it.
    fn clear_inflight(&self, generation: u64) {
        let mut slot = self
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.started_generation.load(Ordering::SeqCst) == generation {
            *slot = None;
        }
    }
}

impl std::fmt::Debug for SnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotStore")
            .field("applied_generation", &self.applied_generation)
            .field("last_sync_time", &self.last_sync_time())
            .finish_non_exhaustive()
    }
}
