// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{incident, patrol, payload, resource};
use crate::filter::{FilterContext, FilterDefaults, TaskCategory, TaskFilter};
use crate::snapshot::Snapshot;
use cad_domain::{Callsign, IncidentGrade, ResourceStatus, SyncPayload};

fn ctx<'a>(snapshot: &'a Snapshot, viewer: Option<&'a Callsign>) -> FilterContext<'a> {
    FilterContext {
        snapshot,
        viewer,
        patrol_group: Some("Collingwood"),
    }
}

#[test]
fn test_priority_row_scenario() {
    // Incidents on; P2 and P3 on, P1 and P4 off.
    let mut filter: TaskFilter = TaskFilter::default();
    filter.incidents.priorities.p1 = false;
    filter.incidents.priorities.p4 = false;

    let data: SyncPayload = SyncPayload {
        incidents: vec![
            incident("I-P1", Some(IncidentGrade::P1), "Collingwood"),
            incident("I-P2", Some(IncidentGrade::P2), "Collingwood"),
            incident(
                "I-P5",
                Some(IncidentGrade::Other(String::from("P5"))),
                "Collingwood",
            ),
        ],
        ..SyncPayload::default()
    };
    let snapshot: Snapshot = Snapshot::build(data);
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    let p1 = snapshot.incident("I-P1").unwrap();
    let p2 = snapshot.incident("I-P2").unwrap();
    let p5 = snapshot.incident("I-P5").unwrap();

    assert!(!filter.include_incident(&ctx, p1));
    assert!(filter.include_incident(&ctx, p2));
    // A grade outside the defined row options is never hidden.
    assert!(filter.include_incident(&ctx, p5));
}

#[test]
fn test_disabled_section_hides_category() {
    let mut filter: TaskFilter = TaskFilter::default();
    filter.incidents.enabled = false;

    let snapshot: Snapshot = Snapshot::build(payload());
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    assert!(!filter.category_enabled(TaskCategory::Incidents));
    assert!(filter.filtered_incidents(&ctx).is_empty());
    // Other sections are unaffected.
    assert_eq!(filter.filtered_patrols(&ctx).len(), 1);
}

#[test]
fn test_current_incident_bypasses_rows() {
    // Everything off except the section itself: the viewer's current
    // incident still shows.
    let mut filter: TaskFilter = TaskFilter::default();
    filter.incidents.priorities.p1 = false;
    filter.incidents.statuses.resourced = false;
    filter.incidents.statuses.unresourced = false;

    let snapshot: Snapshot = Snapshot::build(payload());
    let viewer: Callsign = Callsign::new("P24");
    let ctx: FilterContext<'_> = ctx(&snapshot, Some(&viewer));

    let current = snapshot.incident("I-100").unwrap();
    assert!(filter.include_incident(&ctx, current));
}

#[test]
fn test_duress_incident_bypasses_rows() {
    let mut filter: TaskFilter = TaskFilter::default();
    filter.incidents.priorities.p3 = false;

    let mut data: SyncPayload = payload();
    data.resources
        .push(resource("K9", ResourceStatus::Duress, &["I-200"], None));
    let snapshot: Snapshot = Snapshot::build(data);
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    // I-200 is P3 (toggled off) but has a resource in duress.
    let hot = snapshot.incident("I-200").unwrap();
    assert!(filter.include_incident(&ctx, hot));
}

#[test]
fn test_resourced_row_toggles() {
    let mut filter: TaskFilter = TaskFilter::default();
    filter.incidents.statuses.unresourced = false;

    let snapshot: Snapshot = Snapshot::build(payload());
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    // I-100 has an assigned resource, I-200 does not.
    assert!(filter.include_incident(&ctx, snapshot.incident("I-100").unwrap()));
    assert!(!filter.include_incident(&ctx, snapshot.incident("I-200").unwrap()));
}

#[test]
fn test_patrol_area_gate() {
    let filter: TaskFilter = TaskFilter::default();

    let mut data: SyncPayload = payload();
    data.incidents
        .push(incident("I-OUT", Some(IncidentGrade::P1), "Fitzroy"));
    data.patrols.push(patrol("PT-OUT", "Fitzroy"));
    let snapshot: Snapshot = Snapshot::build(data);
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    assert!(!filter.include_incident(&ctx, snapshot.incident("I-OUT").unwrap()));
    assert!(!filter.include_patrol(&ctx, snapshot.patrol("PT-OUT").unwrap()));

    let mut open: TaskFilter = filter;
    open.show_results_outside_patrol_area = true;
    assert!(open.include_incident(&ctx, snapshot.incident("I-OUT").unwrap()));
    assert!(open.include_patrol(&ctx, snapshot.patrol("PT-OUT").unwrap()));
}

#[test]
fn test_gate_inapplicable_without_viewer_group() {
    let filter: TaskFilter = TaskFilter::default();

    let mut data: SyncPayload = SyncPayload::default();
    data.incidents
        .push(incident("I-OUT", Some(IncidentGrade::P1), "Fitzroy"));
    let snapshot: Snapshot = Snapshot::build(data);
    let ctx: FilterContext<'_> = FilterContext {
        snapshot: &snapshot,
        viewer: None,
        patrol_group: None,
    };

    assert!(filter.include_incident(&ctx, snapshot.incident("I-OUT").unwrap()));
}

#[test]
fn test_off_duty_resources_never_shown() {
    let filter: TaskFilter = TaskFilter::default();

    let mut data: SyncPayload = payload();
    data.resources
        .push(resource("Q7", ResourceStatus::OffDuty, &[], None));
    let snapshot: Snapshot = Snapshot::build(data);
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    let off_duty = snapshot.resource(&Callsign::new("Q7")).unwrap();
    assert!(!filter.include_resource(&ctx, off_duty));
}

#[test]
fn test_duress_resource_shown_despite_toggles() {
    let mut filter: TaskFilter = TaskFilter::default();
    filter.resources.tasked = false;
    filter.resources.untasked = false;

    let mut data: SyncPayload = payload();
    data.resources
        .push(resource("K9", ResourceStatus::Duress, &[], None));
    let snapshot: Snapshot = Snapshot::build(data);
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    assert!(filter.include_resource(&ctx, snapshot.resource(&Callsign::new("K9")).unwrap()));
    assert!(!filter.include_resource(&ctx, snapshot.resource(&Callsign::new("B18")).unwrap()));
}

#[test]
fn test_tasked_and_untasked_toggles() {
    let mut filter: TaskFilter = TaskFilter::default();
    filter.resources.untasked = false;

    let snapshot: Snapshot = Snapshot::build(payload());
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    // P24 is tasked with I-100; B18 is untasked.
    assert!(filter.include_resource(&ctx, snapshot.resource(&Callsign::new("P24")).unwrap()));
    assert!(!filter.include_resource(&ctx, snapshot.resource(&Callsign::new("B18")).unwrap()));
}

#[test]
fn test_defaults_differ_per_screen() {
    let list: TaskFilter = TaskFilter::defaults(FilterDefaults::List);
    let map: TaskFilter = TaskFilter::defaults(FilterDefaults::Map);

    assert!(!list.show_results_outside_patrol_area);
    assert!(map.show_results_outside_patrol_area);
    assert!(list.incidents.enabled && map.incidents.enabled);
}

#[test]
fn test_reset_restores_value_equal_copy_without_aliasing() {
    let mut filter: TaskFilter = TaskFilter::defaults(FilterDefaults::Map);
    filter.incidents.priorities.p1 = false;
    filter.broadcasts_enabled = false;

    let mut other: TaskFilter = filter;
    other.reset(FilterDefaults::Map);

    assert_eq!(other, TaskFilter::defaults(FilterDefaults::Map));
    // The reset copy does not alias: the original keeps its edits.
    assert!(!filter.incidents.priorities.p1);
    assert!(!filter.broadcasts_enabled);
}

#[test]
fn test_annotations_project_located_entities() {
    let filter: TaskFilter = TaskFilter::default();

    let mut data: SyncPayload = payload();
    // An unlocated incident produces no annotation.
    let mut unlocated: cad_domain::Incident =
        incident("I-NOWHERE", Some(IncidentGrade::P2), "Collingwood");
    unlocated.location = None;
    data.incidents.push(unlocated);
    let snapshot: Snapshot = Snapshot::build(data);
    let ctx: FilterContext<'_> = ctx(&snapshot, None);

    let annotations = filter.annotations(&ctx);
    assert!(
        annotations
            .iter()
            .all(|annotation| annotation.identifier != "I-NOWHERE")
    );

    let incident_pin = annotations
        .iter()
        .find(|annotation| annotation.identifier == "I-100")
        .unwrap();
    assert_eq!(incident_pin.category, TaskCategory::Incidents);
    assert!(incident_pin.badge.is_some());

    let resource_pin = annotations
        .iter()
        .find(|annotation| annotation.identifier == "P24")
        .unwrap();
    assert_eq!(resource_pin.category, TaskCategory::Resources);
    assert_eq!(resource_pin.subtitle.as_deref(), Some("(2)"));
    assert!(!resource_pin.duress);
}
