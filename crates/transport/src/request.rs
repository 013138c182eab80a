// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cad_domain::{Callsign, Coordinate, ResourceStatus};
use serde::{Deserialize, Serialize};

/// The scope of a snapshot pull.
///
/// A sync either covers a patrol group or a map viewport; the backend
/// returns every entity visible to that scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum SyncRequest {
    /// All entities within a patrol group.
    PatrolGroup {
        /// The patrol group name.
        patrol_group: String,
    },
    /// All entities within a map viewport.
    BoundingBox {
        /// The north-west corner of the viewport.
        north_west: Coordinate,
        /// The south-east corner of the viewport.
        south_east: Coordinate,
    },
}

/// A request to change the operational status of a callsign.
///
/// Validation (incident requirement, transition legality) happens in the
/// session before this request is built; the transport submits it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// The callsign whose status is changing.
    pub callsign: Callsign,
    /// The new status.
    pub status: ResourceStatus,
    /// The incident the status refers to, for incident-family statuses.
    #[serde(default)]
    pub incident_number: Option<String>,
    /// Reason or remarks for the change.
    #[serde(default)]
    pub comments: Option<String>,
    /// Remarks about the callsign's location at the time of the change.
    #[serde(default)]
    pub location_comments: Option<String>,
}
