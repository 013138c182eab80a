// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::association::{AssociatedPerson, AssociatedVehicle};
use crate::geo::Location;
use crate::grade::IncidentGrade;
use crate::types::ActivityLogItem;
use serde::{Deserialize, Serialize};

/// The person who reported an incident.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Informant {
    /// Full name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Primary contact number.
    #[serde(default)]
    pub primary_phone: Option<String>,
}

/// An incident as transmitted by the backend.
///
/// The incident carries no status field: status is derived from the
/// snapshot's assignment relationships (see the core crate), never
/// trusted from the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Opaque backend identifier.
    pub identifier: String,
    /// The display key officers know the incident by. May differ from
    /// `identifier`; all assignment references use this number.
    pub incident_number: String,
    /// Secondary dispatch code.
    #[serde(default)]
    pub secondary_code: Option<String>,
    /// Free-text incident type (e.g., "Vehicle Theft").
    #[serde(default)]
    pub incident_type: Option<String>,
    /// Priority grade, when graded.
    #[serde(default)]
    pub grade: Option<IncidentGrade>,
    /// Patrol group the incident falls inside.
    #[serde(default)]
    pub patrol_group: Option<String>,
    /// Where the incident is.
    #[serde(default)]
    pub location: Option<Location>,
    /// When the incident was created.
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// When the backend last updated the incident.
    #[serde(default)]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    /// Free-text details.
    #[serde(default)]
    pub details: Option<String>,
    /// Who reported the incident.
    #[serde(default)]
    pub informant: Option<Informant>,
    /// Persons associated with the incident.
    #[serde(default)]
    pub persons: Vec<AssociatedPerson>,
    /// Vehicles associated with the incident.
    #[serde(default)]
    pub vehicles: Vec<AssociatedVehicle>,
    /// Additional locations of interest.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// The narrative, in backend order.
    #[serde(default)]
    pub narrative: Vec<ActivityLogItem>,
}

impl Incident {
    /// Returns the coordinate of the incident, if located.
    #[must_use]
    pub fn coordinate(&self) -> Option<crate::geo::Coordinate> {
        self.location.as_ref().and_then(|location| location.coordinate)
    }

    /// List/annotation title: the incident type, falling back to the
    /// incident number.
    #[must_use]
    pub fn title(&self) -> &str {
        self.incident_type
            .as_deref()
            .unwrap_or(self.incident_number.as_str())
    }
}
