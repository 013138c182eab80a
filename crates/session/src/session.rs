// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The session service: one explicitly constructed instance per login,
//! torn down at logout, passed to consumers rather than reached through
//! a global.

use crate::error::{SessionError, translate_domain_error};
use cad_audit::{Action, ActivityLog, ActivityRecord, Actor};
use cad_core::{CadEvent, EventBus, Snapshot, SnapshotStore, incident_status};
use cad_domain::{
    BookOffRequest, BookOnRequest, BoundingBox, Callsign, Incident, IncidentStatus, Officer,
    Resource, ResourceStatus, StatusChange,
};
use cad_transport::{CadTransport, StatusChangeRequest, SyncRequest};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// A map viewport must move or resize by at least this fraction of its
/// span before a new bounding-box sync is worth issuing.
const MAP_RESYNC_FRACTION: f64 = 0.05;

/// What scope the session is currently syncing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SyncMode {
    /// Not syncing (no patrol group, no viewport).
    #[default]
    None,
    /// Syncing the named patrol group.
    PatrolGroup(String),
    /// Syncing a map viewport.
    Map(BoundingBox),
}

/// Mutable session state behind one lock.
#[derive(Debug, Default)]
struct SessionState {
    /// The logged-in officer, once fetched.
    officer: Option<Officer>,
    /// The session's patrol group.
    patrol_group: Option<String>,
    /// Current sync scope.
    sync_mode: SyncMode,
    /// The live book-on record; lifetime is one shift.
    book_on: Option<BookOnRequest>,
    /// The viewport of the last issued bounding-box sync.
    last_map_box: Option<BoundingBox>,
}

/// The CAD session: snapshot access, book-on lifecycle and the callsign
/// status engine.
///
/// Every mutation validates locally first, submits through the transport
/// boundary, appends an activity record, publishes the matching change
/// notification, and requests a snapshot refresh so derived statuses
/// reflect the change. Transport failures surface verbatim and leave
/// local state untouched.
pub struct CadSession {
    transport: Arc<dyn CadTransport>,
    store: Arc<SnapshotStore>,
    events: EventBus,
    state: Mutex<SessionState>,
    activity: Mutex<ActivityLog>,
}

impl CadSession {
    /// Creates a new session over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn CadTransport>) -> Self {
        let events: EventBus = EventBus::default();
        let store: Arc<SnapshotStore> = SnapshotStore::new(Arc::clone(&transport), events.clone());
        Self {
            transport,
            store,
            events,
            state: Mutex::new(SessionState::default()),
            activity: Mutex::new(ActivityLog::new()),
        }
    }

    /// The session's change notification bus.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// The current snapshot. Never blocks on a refresh.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.store.current()
    }

    /// When the last successful sync was applied.
    #[must_use]
    pub fn last_sync_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.store.last_sync_time()
    }

    /// The logged-in officer's details, once fetched.
    #[must_use]
    pub fn officer_details(&self) -> Option<Officer> {
        self.lock_state().officer.clone()
    }

    /// The session's patrol group.
    #[must_use]
    pub fn patrol_group(&self) -> Option<String> {
        self.lock_state().patrol_group.clone()
    }

    /// The current sync mode.
    #[must_use]
    pub fn sync_mode(&self) -> SyncMode {
        self.lock_state().sync_mode.clone()
    }

    /// The live book-on record, if booked on.
    #[must_use]
    pub fn last_book_on(&self) -> Option<BookOnRequest> {
        self.lock_state().book_on.clone()
    }

    /// The booked-on callsign, if booked on.
    #[must_use]
    pub fn booked_on_callsign(&self) -> Option<Callsign> {
        self.lock_state()
            .book_on
            .as_ref()
            .map(|book_on| book_on.callsign.clone())
    }

    /// A copy of the session's activity log.
    #[must_use]
    pub fn activity_log(&self) -> ActivityLog {
        self.lock_activity().clone()
    }

    // ------------------------------------------------------------------
    // Read accessors over the snapshot
    // ------------------------------------------------------------------

    /// The resource matching the booked-on callsign, or `None` when not
    /// booked on or not present in the snapshot.
    #[must_use]
    pub fn current_resource(&self) -> Option<Resource> {
        let callsign: Callsign = self.booked_on_callsign()?;
        self.snapshot().resource(&callsign).cloned()
    }

    /// The current incident of the booked-on callsign.
    #[must_use]
    pub fn current_incident(&self) -> Option<Incident> {
        let callsign: Callsign = self.booked_on_callsign()?;
        self.snapshot().incident_for_resource(&callsign).cloned()
    }

    /// Derives the status of an incident relative to the booked-on
    /// callsign.
    #[must_use]
    pub fn incident_status(&self, incident_number: &str) -> IncidentStatus {
        let snapshot: Arc<Snapshot> = self.snapshot();
        let viewer: Option<Callsign> = self.booked_on_callsign();
        incident_status(incident_number, &snapshot, viewer.as_ref())
    }

    /// All resources assigned to an incident, in backend order.
    #[must_use]
    pub fn resources_for_incident(&self, incident_number: &str) -> Vec<Resource> {
        self.snapshot()
            .resources_for_incident(incident_number)
            .into_iter()
            .cloned()
            .collect()
    }

    /// All officers of a resource, in the resource's officer order.
    #[must_use]
    pub fn officers_for_resource(&self, callsign: &Callsign) -> Vec<Officer> {
        self.snapshot()
            .officers_for_resource(callsign)
            .into_iter()
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Sync
    // ------------------------------------------------------------------

    /// Performs the initial sync after login: fetches the logged-in
    /// officer's details, then pulls the first snapshot.
    ///
    /// # Errors
    ///
    /// Returns a transport failure from either step.
    pub async fn sync_initial(&self, payroll_id: &str) -> Result<Officer, SessionError> {
        let officer: Officer = self.transport.fetch_employee_details(payroll_id).await?;
        info!(payroll_id = %officer.payroll_id, "logged-in officer details fetched");
        self.lock_state().officer = Some(officer.clone());
        self.refresh().await?;
        Ok(officer)
    }

    /// Sets the session's patrol group and re-scopes syncing to it.
    ///
    /// Clearing the group stops syncing. Changing it forces a refresh
    /// that supersedes any in-flight one, since an in-flight result
    /// would describe the wrong scope.
    ///
    /// # Errors
    ///
    /// Returns the refresh failure, if any; the previous snapshot is
    /// retained.
    pub async fn set_patrol_group(&self, patrol_group: Option<String>) -> Result<(), SessionError> {
        let request: Option<SyncRequest> = {
            let mut state = self.lock_state();
            state.patrol_group.clone_from(&patrol_group);
            state.last_map_box = None;
            match &patrol_group {
                Some(group) => {
                    state.sync_mode = SyncMode::PatrolGroup(group.clone());
                    Some(SyncRequest::PatrolGroup {
                        patrol_group: group.clone(),
                    })
                }
                None => {
                    state.sync_mode = SyncMode::None;
                    None
                }
            }
        };

        if let Some(request) = request {
            self.store.refresh_now(request).await?;
        }
        Ok(())
    }

    /// Re-scopes syncing to a map viewport.
    ///
    /// A viewport that has moved and resized less than 5% since the last
    /// issued bounding-box sync is ignored. Switching from another sync
    /// mode forces a refresh that supersedes any in-flight one.
    ///
    /// # Errors
    ///
    /// Returns the refresh failure, if any.
    pub async fn set_map_viewport(&self, viewport: BoundingBox) -> Result<(), SessionError> {
        let action: Option<(SyncRequest, bool)> = {
            let mut state = self.lock_state();
            let was_map: bool = matches!(state.sync_mode, SyncMode::Map(_));
            let unchanged: bool = was_map
                && state.last_map_box.is_some_and(|previous| {
                    viewport.moved_fraction(&previous) < MAP_RESYNC_FRACTION
                        && viewport.resized_fraction(&previous) < MAP_RESYNC_FRACTION
                });
            state.sync_mode = SyncMode::Map(viewport);
            if unchanged {
                None
            } else {
                state.last_map_box = Some(viewport);
                let request: SyncRequest = SyncRequest::BoundingBox {
                    north_west: viewport.north_west,
                    south_east: viewport.south_east,
                };
                Some((request, !was_map))
            }
        };

        match action {
            Some((request, true)) => {
                self.store.refresh_now(request).await?;
            }
            Some((request, false)) => {
                self.store.refresh(request).await?;
            }
            None => {}
        }
        Ok(())
    }

    /// Refreshes the snapshot for the current sync mode, coalescing with
    /// any in-flight refresh.
    ///
    /// # Errors
    ///
    /// Returns the transport failure; the previous snapshot is retained.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, SessionError> {
        match self.sync_request() {
            Some(request) => Ok(self.store.refresh(request).await?),
            None => Ok(self.store.current()),
        }
    }

    // ------------------------------------------------------------------
    // Book-on lifecycle
    // ------------------------------------------------------------------

    /// Books a callsign on to a shift.
    ///
    /// # Errors
    ///
    /// Returns a `DomainRuleViolation` before any transport call when the
    /// request is invalid, or the transport failure verbatim.
    pub async fn book_on(&self, request: BookOnRequest) -> Result<(), SessionError> {
        request.validate().map_err(translate_domain_error)?;

        let status_before: Option<String> = self
            .snapshot()
            .resource(&request.callsign)
            .map(|resource| resource.status.as_str().to_owned());

        self.transport.book_on(&request).await?;

        // A book-on that does not include the logged-in officer updates
        // the callsign's crew but leaves this session booked off.
        let includes_self: bool = {
            let state = self.lock_state();
            state.officer.as_ref().is_none_or(|officer| {
                request
                    .payroll_ids()
                    .iter()
                    .any(|payroll_id| *payroll_id == officer.payroll_id)
            })
        };

        let callsign: Callsign = request.callsign.clone();
        let officer_count: usize = request.officers.len();
        {
            let mut state = self.lock_state();
            state.book_on = if includes_self {
                Some(request)
            } else {
                None
            };
        }

        self.append_activity(
            callsign.clone(),
            Action::new(
                String::from("BookOn"),
                Some(format!("{officer_count} officer(s) booked on")),
            ),
            status_before,
            None,
        );
        info!(callsign = %callsign, includes_self, "booked on");
        self.events.emit_lossy(CadEvent::BookOnChanged);
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// Validates that the shift could be terminated right now.
    ///
    /// # Errors
    ///
    /// Returns `NotBookedOn`, or a `DomainRuleViolation` when the current
    /// status blocks termination or an incident is still assigned.
    pub fn validate_termination(&self) -> Result<Callsign, SessionError> {
        let callsign: Callsign = self.booked_on_callsign().ok_or(SessionError::NotBookedOn)?;

        let snapshot: Arc<Snapshot> = self.snapshot();
        if let Some(resource) = snapshot.resource(&callsign) {
            if !resource.status.can_terminate() {
                return Err(translate_domain_error(
                    cad_domain::DomainError::TerminationBlockedByStatus {
                        status: resource.status.as_str().to_owned(),
                    },
                ));
            }
            // A live assignment alone blocks termination, even from a
            // general status.
            if let Some(incident_number) = &resource.current_incident {
                return Err(translate_domain_error(
                    cad_domain::DomainError::TerminationBlockedByIncident {
                        callsign: callsign.value().to_owned(),
                        incident_number: incident_number.clone(),
                    },
                ));
            }
        }
        Ok(callsign)
    }

    /// Terminates the shift (books the callsign off).
    ///
    /// # Errors
    ///
    /// Returns the validation error without contacting the backend, or
    /// the transport failure verbatim (the book-on record is retained on
    /// failure).
    pub async fn terminate_shift(&self) -> Result<(), SessionError> {
        let callsign: Callsign = self.validate_termination()?;

        let status_before: Option<String> = self
            .snapshot()
            .resource(&callsign)
            .map(|resource| resource.status.as_str().to_owned());

        self.transport
            .book_off(&BookOffRequest::new(callsign.clone()))
            .await?;

        self.lock_state().book_on = None;

        self.append_activity(
            callsign.clone(),
            Action::new(String::from("BookOff"), None),
            status_before,
            Some(ResourceStatus::OffDuty.as_str().to_owned()),
        );
        info!(callsign = %callsign, "shift terminated");
        self.events.emit_lossy(CadEvent::BookOnChanged);
        self.refresh_after_mutation().await;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Callsign status engine
    // ------------------------------------------------------------------

    /// Changes the booked-on callsign's operational status.
    ///
    /// Incident-family statuses require a current incident: either one
    /// already set on the resource, or `incident_number` supplied with
    /// the change. Moving from an incident status to a general one
    /// requires `comments` as the reason; the incident relationship is
    /// cleared by the backend, not assumed locally.
    ///
    /// # Errors
    ///
    /// Returns a `DomainRuleViolation` before any transport call for an
    /// illegal transition, or the transport failure verbatim (the local
    /// status is unchanged until a refresh confirms it).
    pub async fn update_status(
        &self,
        new_status: ResourceStatus,
        incident_number: Option<String>,
        comments: Option<String>,
    ) -> Result<(), SessionError> {
        let callsign: Callsign = self.booked_on_callsign().ok_or(SessionError::NotBookedOn)?;

        let snapshot: Arc<Snapshot> = self.snapshot();
        let resource: &Resource =
            snapshot
                .resource(&callsign)
                .ok_or_else(|| SessionError::ResourceNotFound {
                    callsign: callsign.value().to_owned(),
                })?;

        let effective_incident: Option<String> =
            incident_number.or_else(|| resource.current_incident.clone());

        let change: StatusChange = resource
            .status
            .change_to(&new_status, effective_incident.is_some())
            .map_err(translate_domain_error)?;

        if change.requires_reason && comments.is_none() {
            return Err(SessionError::DomainRuleViolation {
                rule: String::from("reason_required"),
                message: String::from(
                    "A reason is required when leaving an incident status for a general one",
                ),
            });
        }

        let request: StatusChangeRequest = StatusChangeRequest {
            callsign: callsign.clone(),
            status: new_status.clone(),
            // General statuses carry no incident reference.
            incident_number: if new_status.is_incident_status() {
                effective_incident
            } else {
                None
            },
            comments,
            location_comments: None,
        };
        let status_before: String = resource.status.as_str().to_owned();
        drop(snapshot);

        self.transport.submit_status_change(&request).await?;

        self.append_activity(
            callsign.clone(),
            Action::new(
                String::from("UpdateStatus"),
                request.incident_number.clone(),
            ),
            Some(status_before),
            Some(new_status.as_str().to_owned()),
        );
        info!(callsign = %callsign, status = %new_status, "callsign status updated");
        self.events.emit_lossy(CadEvent::CallsignChanged);
        self.refresh_after_mutation().await;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_activity(&self) -> std::sync::MutexGuard<'_, ActivityLog> {
        self.activity.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The sync request for the current mode, or `None` when idle.
    fn sync_request(&self) -> Option<SyncRequest> {
        match self.lock_state().sync_mode.clone() {
            SyncMode::None => None,
            SyncMode::PatrolGroup(patrol_group) => {
                Some(SyncRequest::PatrolGroup { patrol_group })
            }
            SyncMode::Map(viewport) => Some(SyncRequest::BoundingBox {
                north_west: viewport.north_west,
                south_east: viewport.south_east,
            }),
        }
    }

    /// Appends one activity record attributed to the logged-in officer.
    fn append_activity(
        &self,
        callsign: Callsign,
        action: Action,
        status_before: Option<String>,
        status_after: Option<String>,
    ) {
        let actor: Actor = self
            .lock_state()
            .officer
            .as_ref()
            .map_or_else(Actor::system, |officer| {
                Actor::officer(&officer.payroll_id)
            });
        self.lock_activity().append(ActivityRecord::new(
            actor,
            callsign,
            action,
            status_before,
            status_after,
        ));
    }

    /// Refreshes after a successful mutation so derived statuses catch
    /// up. The mutation already succeeded, so a refresh failure is
    /// logged rather than returned; the next poll will retry.
    async fn refresh_after_mutation(&self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "post-mutation refresh failed");
        }
    }
}

impl std::fmt::Debug for CadSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CadSession")
            .field("sync_mode", &self.sync_mode())
            .field("booked_on", &self.booked_on_callsign())
            .finish_non_exhaustive()
    }
}
