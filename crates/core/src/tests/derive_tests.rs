// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{incident, payload, resource};
use crate::derive::{incident_has_duress, incident_status};
use crate::snapshot::Snapshot;
use cad_domain::{Callsign, IncidentGrade, IncidentStatus, ResourceStatus, SyncPayload};

fn snapshot_with_viewer() -> Snapshot {
    let mut data: SyncPayload = payload();
    data.incidents
        .push(incident("I-300", Some(IncidentGrade::P2), "Collingwood"));
    data.incidents
        .push(incident("I-400", Some(IncidentGrade::P4), "Collingwood"));
    // Viewer's resource: current I-100, also assigned I-300.
    data.resources[0] = resource(
        "P24",
        ResourceStatus::Proceeding,
        &["I-100", "I-300"],
        Some("I-100"),
    );
    // Another crew resources I-200.
    data.resources[1] = resource("B18", ResourceStatus::AtIncident, &["I-200"], Some("I-200"));
    Snapshot::build(data)
}

#[test]
fn test_current_for_viewers_current_incident() {
    let snapshot: Snapshot = snapshot_with_viewer();
    let viewer: Callsign = Callsign::new("P24");

    assert_eq!(
        incident_status("I-100", &snapshot, Some(&viewer)),
        IncidentStatus::Current
    );
}

#[test]
fn test_assigned_for_viewers_non_current_assignment() {
    let snapshot: Snapshot = snapshot_with_viewer();
    let viewer: Callsign = Callsign::new("P24");

    assert_eq!(
        incident_status("I-300", &snapshot, Some(&viewer)),
        IncidentStatus::Assigned
    );
}

#[test]
fn test_resourced_for_other_crews_incident() {
    let snapshot: Snapshot = snapshot_with_viewer();
    let viewer: Callsign = Callsign::new("P24");

    assert_eq!(
        incident_status("I-200", &snapshot, Some(&viewer)),
        IncidentStatus::Resourced
    );
}

#[test]
fn test_unresourced_when_nobody_assigned() {
    let snapshot: Snapshot = snapshot_with_viewer();
    let viewer: Callsign = Callsign::new("P24");

    assert_eq!(
        incident_status("I-400", &snapshot, Some(&viewer)),
        IncidentStatus::Unresourced
    );
}

#[test]
fn test_at_most_one_current_per_resource() {
    let snapshot: Snapshot = snapshot_with_viewer();
    let viewer: Callsign = Callsign::new("P24");

    let current_count: usize = snapshot
        .incidents()
        .iter()
        .filter(|entry| {
            incident_status(&entry.incident_number, &snapshot, Some(&viewer))
                == IncidentStatus::Current
        })
        .count();
    assert_eq!(current_count, 1);
}

#[test]
fn test_without_viewer_only_resourced_or_unresourced() {
    let snapshot: Snapshot = snapshot_with_viewer();

    for entry in snapshot.incidents() {
        let status: IncidentStatus = incident_status(&entry.incident_number, &snapshot, None);
        assert!(
            matches!(
                status,
                IncidentStatus::Resourced | IncidentStatus::Unresourced
            ),
            "{}: {status}",
            entry.incident_number
        );
    }
}

#[test]
fn test_unknown_viewer_callsign_falls_back_to_assignment_data() {
    let snapshot: Snapshot = snapshot_with_viewer();
    let stranger: Callsign = Callsign::new("ZZ99");

    assert_eq!(
        incident_status("I-100", &snapshot, Some(&stranger)),
        IncidentStatus::Resourced
    );
}

#[test]
fn test_duress_detection_walks_assignments() {
    let mut data: SyncPayload = payload();
    data.resources
        .push(resource("K9", ResourceStatus::Duress, &["I-200"], None));
    let snapshot: Snapshot = Snapshot::build(data);

    assert!(incident_has_duress("I-200", &snapshot));
    assert!(!incident_has_duress("I-100", &snapshot));
}
