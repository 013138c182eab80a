// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived incident status.
//!
//! Status is computed from the relationships inside a snapshot and the
//! viewer's own resource identity. It is never stored on the incident
//! record, so assignment data and status can never drift apart.

use crate::snapshot::Snapshot;
use cad_domain::{Callsign, IncidentStatus, Resource};

/// Derives the status of an incident relative to the viewer.
///
/// * `Current`: the viewer's resource has this incident as its current
///   incident.
/// * `Assigned`: the viewer's resource is assigned to this incident,
///   but it is not the current one.
/// * `Resourced`: any resource is assigned to this incident.
/// * `Unresourced`: otherwise.
///
/// `viewer` is the booked-on callsign, or `None` when not booked on.
#[must_use]
pub fn incident_status(
    incident_number: &str,
    snapshot: &Snapshot,
    viewer: Option<&Callsign>,
) -> IncidentStatus {
    if let Some(own) = viewer.and_then(|callsign| snapshot.resource(callsign)) {
        if own.current_incident.as_deref() == Some(incident_number) {
            return IncidentStatus::Current;
        }
        if own.is_assigned_to(incident_number) {
            return IncidentStatus::Assigned;
        }
    }

    if snapshot.resource_count(incident_number) > 0 {
        IncidentStatus::Resourced
    } else {
        IncidentStatus::Unresourced
    }
}

/// Returns true if any resource assigned to the incident is in duress.
#[must_use]
pub fn incident_has_duress(incident_number: &str, snapshot: &Snapshot) -> bool {
    snapshot
        .resources_for_incident(incident_number)
        .iter()
        .any(|resource: &&Resource| resource.status.is_duress())
}
