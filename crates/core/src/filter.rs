// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The multi-criterion filter shared by list and map consumers.
//!
//! A filter is a tree of independently toggled sections, each optionally
//! holding multi-select rows. Row semantics: a value that maps to a
//! defined row option is included iff that option is on; a value outside
//! the row's defined options is never hidden by that row, so entities the
//! filter was not designed to classify stay visible.

use crate::derive::{incident_has_duress, incident_status};
use crate::snapshot::Snapshot;
use cad_domain::{
    Broadcast, Callsign, Coordinate, GradeBadge, Incident, IncidentGrade, IncidentStatus, Patrol,
    Resource,
};
use serde::{Deserialize, Serialize};

/// The entity categories a filter can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// Incidents.
    Incidents,
    /// Directed patrols.
    Patrols,
    /// Broadcasts.
    Broadcasts,
    /// Resources (callsigns).
    Resources,
}

/// Which screen a filter's defaults belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDefaults {
    /// The task list screen.
    List,
    /// The map screen.
    Map,
}

/// The priority row of the incidents section: P1–P4 toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PriorityToggles {
    /// Show P1 incidents.
    pub p1: bool,
    /// Show P2 incidents.
    pub p2: bool,
    /// Show P3 incidents.
    pub p3: bool,
    /// Show P4 incidents.
    pub p4: bool,
}

impl PriorityToggles {
    /// Returns whether the row admits `grade`.
    ///
    /// Grades outside P1–P4 (including an ungraded incident) do not map
    /// to a row option and are never hidden.
    #[must_use]
    pub const fn allows(&self, grade: Option<&IncidentGrade>) -> bool {
        match grade {
            Some(IncidentGrade::P1) => self.p1,
            Some(IncidentGrade::P2) => self.p2,
            Some(IncidentGrade::P3) => self.p3,
            Some(IncidentGrade::P4) => self.p4,
            Some(IncidentGrade::Other(_)) | None => true,
        }
    }
}

impl Default for PriorityToggles {
    fn default() -> Self {
        Self {
            p1: true,
            p2: true,
            p3: true,
            p4: true,
        }
    }
}

/// The resourced row of the incidents section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcedToggles {
    /// Show resourced incidents.
    pub resourced: bool,
    /// Show unresourced incidents.
    pub unresourced: bool,
}

impl ResourcedToggles {
    /// Returns whether the row admits a derived `status`.
    ///
    /// Only `Resourced` and `Unresourced` are row options; `Current` and
    /// `Assigned` do not map to the row and are never hidden by it.
    #[must_use]
    pub const fn allows(&self, status: IncidentStatus) -> bool {
        match status {
            IncidentStatus::Resourced => self.resourced,
            IncidentStatus::Unresourced => self.unresourced,
            IncidentStatus::Assigned | IncidentStatus::Current => true,
        }
    }
}

impl Default for ResourcedToggles {
    fn default() -> Self {
        Self {
            resourced: true,
            unresourced: true,
        }
    }
}

/// The incidents section of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentsFilter {
    /// Whether incidents are shown at all.
    pub enabled: bool,
    /// The priority row.
    pub priorities: PriorityToggles,
    /// The resourced row.
    pub statuses: ResourcedToggles,
}

impl Default for IncidentsFilter {
    fn default() -> Self {
        Self {
            enabled: true,
            priorities: PriorityToggles::default(),
            statuses: ResourcedToggles::default(),
        }
    }
}

/// The resources section of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesFilter {
    /// Whether resources are shown at all.
    pub enabled: bool,
    /// Show resources with a current incident.
    pub tasked: bool,
    /// Show resources without a current incident.
    pub untasked: bool,
}

impl Default for ResourcesFilter {
    fn default() -> Self {
        Self {
            enabled: true,
            tasked: true,
            untasked: true,
        }
    }
}

/// Context a filter evaluates against: the snapshot, the viewer's
/// booked-on callsign, and the viewer's patrol group.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    /// The snapshot under evaluation.
    pub snapshot: &'a Snapshot,
    /// The booked-on callsign, if any.
    pub viewer: Option<&'a Callsign>,
    /// The viewer's patrol group, if known.
    pub patrol_group: Option<&'a str>,
}

/// A serializable, value-semantics filter configuration.
///
/// Two consumers never alias a filter: `reset` and `clone` both produce
/// independent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// The incidents section.
    pub incidents: IncidentsFilter,
    /// Whether patrols are shown.
    pub patrols_enabled: bool,
    /// Whether broadcasts are shown.
    pub broadcasts_enabled: bool,
    /// The resources section.
    pub resources: ResourcesFilter,
    /// Spatial gate: show entities outside the viewer's patrol group.
    pub show_results_outside_patrol_area: bool,
}

impl TaskFilter {
    /// Returns the fixed default configuration for a screen.
    ///
    /// The map defaults show results outside the patrol area; the list
    /// defaults keep results inside it.
    #[must_use]
    pub fn defaults(screen: FilterDefaults) -> Self {
        Self {
            incidents: IncidentsFilter::default(),
            patrols_enabled: true,
            broadcasts_enabled: true,
            resources: ResourcesFilter::default(),
            show_results_outside_patrol_area: matches!(screen, FilterDefaults::Map),
        }
    }

    /// Restores the fixed defaults for a screen, in place.
    pub fn reset(&mut self, screen: FilterDefaults) {
        *self = Self::defaults(screen);
    }

    /// Returns whether a category is visible at all.
    #[must_use]
    pub const fn category_enabled(&self, category: TaskCategory) -> bool {
        match category {
            TaskCategory::Incidents => self.incidents.enabled,
            TaskCategory::Patrols => self.patrols_enabled,
            TaskCategory::Broadcasts => self.broadcasts_enabled,
            TaskCategory::Resources => self.resources.enabled,
        }
    }

    /// The patrol-area gate shared by every category except broadcasts.
    fn inside_patrol_area(&self, ctx: &FilterContext<'_>, entity_group: Option<&str>) -> bool {
        if self.show_results_outside_patrol_area {
            return true;
        }
        match ctx.patrol_group {
            Some(own_group) => entity_group == Some(own_group),
            // Without a known patrol group the gate cannot apply.
            None => true,
        }
    }

    /// Evaluates an incident against the filter.
    #[must_use]
    pub fn include_incident(&self, ctx: &FilterContext<'_>, incident: &Incident) -> bool {
        if !self.incidents.enabled {
            return false;
        }
        if !self.inside_patrol_area(ctx, incident.patrol_group.as_deref()) {
            return false;
        }

        let status: IncidentStatus =
            incident_status(&incident.incident_number, ctx.snapshot, ctx.viewer);
        if status == IncidentStatus::Current {
            return true;
        }
        if incident_has_duress(&incident.incident_number, ctx.snapshot) {
            return true;
        }

        self.incidents.priorities.allows(incident.grade.as_ref())
            && self.incidents.statuses.allows(status)
    }

    /// Evaluates a patrol against the filter.
    #[must_use]
    pub fn include_patrol(&self, ctx: &FilterContext<'_>, patrol: &Patrol) -> bool {
        if !self.patrols_enabled {
            return false;
        }
        self.inside_patrol_area(ctx, patrol.patrol_group.as_deref())
    }

    /// Evaluates a broadcast against the filter.
    #[must_use]
    pub const fn include_broadcast(&self, _ctx: &FilterContext<'_>, _broadcast: &Broadcast) -> bool {
        self.broadcasts_enabled
    }

    /// Evaluates a resource against the filter.
    #[must_use]
    pub fn include_resource(&self, ctx: &FilterContext<'_>, resource: &Resource) -> bool {
        if !self.resources.enabled {
            return false;
        }
        if !self.inside_patrol_area(ctx, resource.patrol_group.as_deref()) {
            return false;
        }
        // Off-duty resources never appear.
        if !resource.status.shown_on_map() {
            return false;
        }
        if resource.status.is_duress() {
            return true;
        }
        if resource.is_tasked() {
            self.resources.tasked
        } else {
            self.resources.untasked
        }
    }

    /// Returns the incidents admitted by the filter, in snapshot order.
    #[must_use]
    pub fn filtered_incidents<'a>(&self, ctx: &FilterContext<'a>) -> Vec<&'a Incident> {
        ctx.snapshot
            .incidents()
            .iter()
            .filter(|incident| self.include_incident(ctx, incident))
            .collect()
    }

    /// Returns the patrols admitted by the filter, in snapshot order.
    #[must_use]
    pub fn filtered_patrols<'a>(&self, ctx: &FilterContext<'a>) -> Vec<&'a Patrol> {
        ctx.snapshot
            .patrols()
            .iter()
            .filter(|patrol| self.include_patrol(ctx, patrol))
            .collect()
    }

    /// Returns the broadcasts admitted by the filter, in snapshot order.
    #[must_use]
    pub fn filtered_broadcasts<'a>(&self, ctx: &FilterContext<'a>) -> Vec<&'a Broadcast> {
        ctx.snapshot
            .broadcasts()
            .iter()
            .filter(|broadcast| self.include_broadcast(ctx, broadcast))
            .collect()
    }

    /// Returns the resources admitted by the filter, in snapshot order.
    #[must_use]
    pub fn filtered_resources<'a>(&self, ctx: &FilterContext<'a>) -> Vec<&'a Resource> {
        ctx.snapshot
            .resources()
            .iter()
            .filter(|resource| self.include_resource(ctx, resource))
            .collect()
    }

    /// Projects every admitted, located entity into plain annotation data
    /// for the map.
    #[must_use]
    pub fn annotations(&self, ctx: &FilterContext<'_>) -> Vec<TaskAnnotation> {
        let mut annotations: Vec<TaskAnnotation> = Vec::new();

        for incident in self.filtered_incidents(ctx) {
            if let Some(coordinate) = incident.coordinate() {
                annotations.push(TaskAnnotation {
                    identifier: incident.incident_number.clone(),
                    category: TaskCategory::Incidents,
                    coordinate,
                    title: incident.title().to_owned(),
                    subtitle: incident
                        .location
                        .as_ref()
                        .and_then(|location| location.full_address.clone()),
                    duress: incident_has_duress(&incident.incident_number, ctx.snapshot),
                    badge: incident.grade.as_ref().map(IncidentGrade::badge),
                });
            }
        }
        for patrol in self.filtered_patrols(ctx) {
            if let Some(coordinate) = patrol.coordinate() {
                annotations.push(TaskAnnotation {
                    identifier: patrol.identifier.clone(),
                    category: TaskCategory::Patrols,
                    coordinate,
                    title: patrol.title().to_owned(),
                    subtitle: patrol.details.clone(),
                    duress: false,
                    badge: None,
                });
            }
        }
        for broadcast in self.filtered_broadcasts(ctx) {
            if let Some(coordinate) = broadcast.coordinate() {
                annotations.push(TaskAnnotation {
                    identifier: broadcast.identifier.clone(),
                    category: TaskCategory::Broadcasts,
                    coordinate,
                    title: broadcast.display_title().to_owned(),
                    subtitle: broadcast.details.clone(),
                    duress: false,
                    badge: None,
                });
            }
        }
        for resource in self.filtered_resources(ctx) {
            let coordinate: Option<Coordinate> = resource
                .location
                .as_ref()
                .and_then(|location| location.coordinate);
            if let Some(coordinate) = coordinate {
                annotations.push(TaskAnnotation {
                    identifier: resource.callsign.value().to_owned(),
                    category: TaskCategory::Resources,
                    coordinate,
                    title: resource.callsign.value().to_owned(),
                    subtitle: resource.officer_count_label(),
                    duress: resource.status.is_duress(),
                    badge: None,
                });
            }
        }

        annotations
    }
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self::defaults(FilterDefaults::List)
    }
}

/// Plain annotation data projected from a filtered entity for the map.
///
/// Rendering (pin drawing, colors beyond the badge, clustering) belongs
/// to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskAnnotation {
    /// The entity's display key.
    pub identifier: String,
    /// The entity category.
    pub category: TaskCategory,
    /// Where the annotation sits.
    pub coordinate: Coordinate,
    /// Primary label.
    pub title: String,
    /// Secondary label.
    pub subtitle: Option<String>,
    /// Whether the annotation should render with duress emphasis.
    pub duress: bool,
    /// Grade badge for incident annotations.
    pub badge: Option<GradeBadge>,
}
