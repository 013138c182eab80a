// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The immutable, indexed aggregate of one snapshot pull.

use cad_domain::{Broadcast, Callsign, Incident, Officer, Patrol, Resource, SyncPayload};
use std::collections::HashMap;
use tracing::warn;

/// An immutable, point-in-time aggregate of all dispatch entities plus
/// constant-time lookup indexes.
///
/// A snapshot is built wholesale from a [`SyncPayload`] and never mutated
/// afterwards; consumers share it behind an `Arc`. Identical payloads
/// build value-equal snapshots, indexes included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    incidents: Vec<Incident>,
    resources: Vec<Resource>,
    officers: Vec<Officer>,
    patrols: Vec<Patrol>,
    broadcasts: Vec<Broadcast>,

    incidents_by_number: HashMap<String, usize>,
    resources_by_callsign: HashMap<Callsign, usize>,
    officers_by_id: HashMap<String, usize>,
    patrols_by_id: HashMap<String, usize>,
    broadcasts_by_id: HashMap<String, usize>,
    /// Inverse assignment index: incident number → resource positions,
    /// in backend order.
    resources_by_incident: HashMap<String, Vec<usize>>,
}

impl Snapshot {
    /// Builds a snapshot from a raw payload, constructing all indexes.
    ///
    /// Resources violating the invariant that `current_incident` is a
    /// member of `assigned_incidents` are normalized by appending the
    /// current incident to the assignment list. Duplicate display keys
    /// keep the last occurrence in the index, matching backend order
    /// precedence.
    #[must_use]
    pub fn build(payload: SyncPayload) -> Self {
        let SyncPayload {
            incidents,
            mut resources,
            officers,
            patrols,
            broadcasts,
        } = payload;

        for resource in &mut resources {
            normalize_assignments(resource);
        }

        let incidents_by_number: HashMap<String, usize> = incidents
            .iter()
            .enumerate()
            .map(|(position, incident)| (incident.incident_number.clone(), position))
            .collect();
        let resources_by_callsign: HashMap<Callsign, usize> = resources
            .iter()
            .enumerate()
            .map(|(position, resource)| (resource.callsign.clone(), position))
            .collect();
        let officers_by_id: HashMap<String, usize> = officers
            .iter()
            .enumerate()
            .map(|(position, officer)| (officer.payroll_id.clone(), position))
            .collect();
        let patrols_by_id: HashMap<String, usize> = patrols
            .iter()
            .enumerate()
            .map(|(position, patrol)| (patrol.identifier.clone(), position))
            .collect();
        let broadcasts_by_id: HashMap<String, usize> = broadcasts
            .iter()
            .enumerate()
            .map(|(position, broadcast)| (broadcast.identifier.clone(), position))
            .collect();

        let mut resources_by_incident: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, resource) in resources.iter().enumerate() {
            for incident_number in &resource.assigned_incidents {
                resources_by_incident
                    .entry(incident_number.clone())
                    .or_default()
                    .push(position);
            }
        }

        Self {
            incidents,
            resources,
            officers,
            patrols,
            broadcasts,
            incidents_by_number,
            resources_by_callsign,
            officers_by_id,
            patrols_by_id,
            broadcasts_by_id,
            resources_by_incident,
        }
    }

    /// Incidents in backend order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Resources in backend order.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Officers in backend order.
    #[must_use]
    pub fn officers(&self) -> &[Officer] {
        &self.officers
    }

    /// Patrols in backend order.
    #[must_use]
    pub fn patrols(&self) -> &[Patrol] {
        &self.patrols
    }

    /// Broadcasts in backend order.
    #[must_use]
    pub fn broadcasts(&self) -> &[Broadcast] {
        &self.broadcasts
    }

    /// Looks up an incident by incident number.
    #[must_use]
    pub fn incident(&self, incident_number: &str) -> Option<&Incident> {
        self.incidents_by_number
            .get(incident_number)
            .map(|position| &self.incidents[*position])
    }

    /// Looks up a resource by callsign.
    #[must_use]
    pub fn resource(&self, callsign: &Callsign) -> Option<&Resource> {
        self.resources_by_callsign
            .get(callsign)
            .map(|position| &self.resources[*position])
    }

    /// Looks up an officer by payroll id.
    #[must_use]
    pub fn officer(&self, payroll_id: &str) -> Option<&Officer> {
        self.officers_by_id
            .get(payroll_id)
            .map(|position| &self.officers[*position])
    }

    /// Looks up a patrol by identifier.
    #[must_use]
    pub fn patrol(&self, identifier: &str) -> Option<&Patrol> {
        self.patrols_by_id
            .get(identifier)
            .map(|position| &self.patrols[*position])
    }

    /// Looks up a broadcast by identifier.
    #[must_use]
    pub fn broadcast(&self, identifier: &str) -> Option<&Broadcast> {
        self.broadcasts_by_id
            .get(identifier)
            .map(|position| &self.broadcasts[*position])
    }

    /// Returns all resources assigned to an incident, in backend order.
    ///
    /// Constant-time via the inverse index built at refresh.
    #[must_use]
    pub fn resources_for_incident(&self, incident_number: &str) -> Vec<&Resource> {
        self.resources_by_incident
            .get(incident_number)
            .map_or_else(Vec::new, |positions| {
                positions
                    .iter()
                    .map(|position| &self.resources[*position])
                    .collect()
            })
    }

    /// Returns how many resources are assigned to an incident.
    #[must_use]
    pub fn resource_count(&self, incident_number: &str) -> usize {
        self.resources_by_incident
            .get(incident_number)
            .map_or(0, Vec::len)
    }

    /// Returns the current incident of a resource, resolved through the
    /// snapshot's indexes.
    #[must_use]
    pub fn incident_for_resource(&self, callsign: &Callsign) -> Option<&Incident> {
        let resource: &Resource = self.resource(callsign)?;
        let incident_number: &str = resource.current_incident.as_deref()?;
        self.incident(incident_number)
    }

    /// Returns all officers of a resource, preserving the resource's
    /// officer order. Payroll ids absent from the snapshot are skipped.
    #[must_use]
    pub fn officers_for_resource(&self, callsign: &Callsign) -> Vec<&Officer> {
        self.resource(callsign)
            .map_or_else(Vec::new, |resource| {
                resource
                    .officer_ids
                    .iter()
                    .filter_map(|payroll_id| self.officer(payroll_id))
                    .collect()
            })
    }

    /// Returns true if the snapshot holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
            && self.resources.is_empty()
            && self.officers.is_empty()
            && self.patrols.is_empty()
            && self.broadcasts.is_empty()
    }
}

/// Appends a stray `current_incident` to `assigned_incidents` and drops
/// duplicate assignment entries, preserving first-seen order.
fn normalize_assignments(resource: &mut Resource) {
    let mut seen: Vec<String> = Vec::with_capacity(resource.assigned_incidents.len());
    for incident_number in resource.assigned_incidents.drain(..) {
        if !seen.contains(&incident_number) {
            seen.push(incident_number);
        }
    }
    resource.assigned_incidents = seen;

    if let Some(current) = &resource.current_incident {
        if !resource.assigned_incidents.iter().any(|number| number == current) {
            warn!(
                callsign = %resource.callsign,
                incident = %current,
                "current incident missing from assignment list; appending"
            );
            resource.assigned_incidents.push(current.clone());
        }
    }
}
