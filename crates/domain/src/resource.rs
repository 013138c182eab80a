// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::geo::Location;
use crate::status::ResourceStatus;
use crate::types::{ActivityLogItem, Callsign};
use serde::{Deserialize, Serialize};

/// The kind of unit a resource is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceUnitType {
    /// A patrol vehicle.
    Vehicle,
    /// A motorcycle unit.
    Motorcycle,
    /// A bicycle unit.
    Bicycle,
    /// An air wing unit.
    Air,
    /// A water police unit.
    Water,
    /// A dog squad unit.
    Dog,
    /// Officers on foot.
    OnFoot,
    /// A unit type outside the defined set, preserved verbatim.
    Other(String),
}

impl ResourceUnitType {
    /// Returns the wire representation of the unit type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Motorcycle => "Motorcycle",
            Self::Bicycle => "Bicycle",
            Self::Air => "Air",
            Self::Water => "Water",
            Self::Dog => "Dog",
            Self::OnFoot => "On Foot",
            Self::Other(value) => value,
        }
    }

    /// Parses a unit type from its wire representation; never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Vehicle" => Self::Vehicle,
            "Motorcycle" => Self::Motorcycle,
            "Bicycle" => Self::Bicycle,
            "Air" => Self::Air,
            "Water" => Self::Water,
            "Dog" => Self::Dog,
            "On Foot" => Self::OnFoot,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl Default for ResourceUnitType {
    fn default() -> Self {
        Self::Vehicle
    }
}

impl From<String> for ResourceUnitType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ResourceUnitType> for String {
    fn from(unit: ResourceUnitType) -> Self {
        unit.as_str().to_owned()
    }
}

/// An equipment item carried by a resource.
///
/// Equality is by id only; counts are compared separately when merging
/// book-on selections against manifest data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    /// The equipment kind id.
    pub id: String,
    /// Display description of the kind.
    #[serde(default)]
    pub description: Option<String>,
    /// How many of this item the resource carries.
    pub count: u32,
}

impl Equipment {
    /// Creates a new `Equipment` item.
    #[must_use]
    pub const fn new(id: String, description: Option<String>, count: u32) -> Self {
        Self {
            id,
            description,
            count,
        }
    }
}

impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Equipment {}

/// A resource (callsign): a unit that can be booked on to a shift and
/// assigned to incidents.
///
/// The callsign is the identity key. `current_incident`, when set, must be
/// a member of `assigned_incidents`; the snapshot builder normalizes
/// payloads that violate this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The callsign, unique within a snapshot.
    pub callsign: Callsign,
    /// Resource category (e.g., "Van", "Sedan").
    #[serde(default)]
    pub category: Option<String>,
    /// Incident numbers this resource is assigned to, in backend order.
    #[serde(default)]
    pub assigned_incidents: Vec<String>,
    /// The incident the resource is currently tasked with.
    #[serde(default)]
    pub current_incident: Option<String>,
    /// Payroll id of the driver.
    #[serde(default)]
    pub driver: Option<String>,
    /// Payroll ids of all officers in the unit, driver included.
    #[serde(default)]
    pub officer_ids: Vec<String>,
    /// Equipment carried by the unit.
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    /// Shift start time.
    #[serde(default)]
    pub shift_start: Option<chrono::DateTime<chrono::Utc>>,
    /// Shift end time.
    #[serde(default)]
    pub shift_end: Option<chrono::DateTime<chrono::Utc>>,
    /// Home station.
    #[serde(default)]
    pub station: Option<String>,
    /// Patrol group the resource belongs to.
    #[serde(default)]
    pub patrol_group: Option<String>,
    /// Operational status.
    #[serde(default)]
    pub status: ResourceStatus,
    /// Unit type.
    #[serde(default, rename = "type")]
    pub unit_type: ResourceUnitType,
    /// Last known location.
    #[serde(default)]
    pub location: Option<Location>,
    /// When the backend last updated this record.
    #[serde(default)]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    /// Activity log, in backend order.
    #[serde(default)]
    pub activity_log: Vec<ActivityLogItem>,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: Option<String>,
    /// Fleet serial number.
    #[serde(default)]
    pub serial: Option<String>,
}

impl Resource {
    /// Returns true if the resource is assigned to `incident_number`.
    #[must_use]
    pub fn is_assigned_to(&self, incident_number: &str) -> bool {
        self.assigned_incidents
            .iter()
            .any(|number| number == incident_number)
    }

    /// Returns true if the resource has a current incident.
    #[must_use]
    pub const fn is_tasked(&self) -> bool {
        self.current_incident.is_some()
    }

    /// Officer count label in the format `(n)`, or `None` when the unit
    /// has no officers. A pure projection, recomputed on demand.
    #[must_use]
    pub fn officer_count_label(&self) -> Option<String> {
        if self.officer_ids.is_empty() {
            None
        } else {
            Some(format!("({})", self.officer_ids.len()))
        }
    }

    /// Equipment descriptions joined by `separator`, skipping zero counts.
    /// `None` when nothing is carried.
    #[must_use]
    pub fn equipment_list(&self, separator: &str) -> Option<String> {
        let parts: Vec<&str> = self
            .equipment
            .iter()
            .filter(|item| item.count > 0)
            .map(|item| item.description.as_deref().unwrap_or(item.id.as_str()))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(separator))
        }
    }

    /// Shift duration, or `None` unless both shift times are present.
    #[must_use]
    pub fn shift_duration(&self) -> Option<chrono::Duration> {
        match (self.shift_start, self.shift_end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
