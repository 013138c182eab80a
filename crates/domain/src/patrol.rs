// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::association::{AssociatedPerson, AssociatedVehicle};
use crate::geo::Location;
use crate::types::ActivityLogItem;
use serde::{Deserialize, Serialize};

/// A directed patrol task: an area or premises to be given attention,
/// without resource assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    /// The display key officers know the patrol by.
    pub identifier: String,
    /// Free-text patrol type (e.g., "Liquor Controls").
    #[serde(default)]
    pub patrol_type: Option<String>,
    /// Subtype refinement.
    #[serde(default)]
    pub subtype: Option<String>,
    /// Patrol group the patrol falls inside.
    #[serde(default)]
    pub patrol_group: Option<String>,
    /// Where the patrol is.
    #[serde(default)]
    pub location: Option<Location>,
    /// Free-text details.
    #[serde(default)]
    pub details: Option<String>,
    /// When the patrol was created.
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// When the backend last updated the patrol.
    #[serde(default)]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    /// Persons associated with the patrol.
    #[serde(default)]
    pub persons: Vec<AssociatedPerson>,
    /// Vehicles associated with the patrol.
    #[serde(default)]
    pub vehicles: Vec<AssociatedVehicle>,
    /// The narrative, in backend order.
    #[serde(default)]
    pub narrative: Vec<ActivityLogItem>,
}

impl Patrol {
    /// Returns the coordinate of the patrol, if located.
    #[must_use]
    pub fn coordinate(&self) -> Option<crate::geo::Coordinate> {
        self.location.as_ref().and_then(|location| location.coordinate)
    }

    /// List/annotation title: the patrol type, falling back to the
    /// identifier.
    #[must_use]
    pub fn title(&self) -> &str {
        self.patrol_type
            .as_deref()
            .unwrap_or(self.identifier.as_str())
    }
}
