// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Callsign operational status states and transition logic.
//!
//! Statuses fall into two families: general statuses, which never need an
//! incident, and incident statuses, which require the resource to have a
//! current incident. Transitions are validated locally before any request
//! reaches the transport layer.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Operational status of a resource (callsign).
///
/// Unrecognized wire values are preserved verbatim in `Unknown` and are
/// treated as general statuses so the client never hides or rejects a
/// status it was not built to classify.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceStatus {
    // General statuses, no incident required.
    /// Not available for tasking.
    Unavailable,
    /// Available on the radio.
    OnAir,
    /// On a meal break.
    MealBreak,
    /// Conducting a traffic stop.
    TrafficStop,
    /// Attending court.
    Court,
    /// At the station.
    AtStation,
    /// On call.
    OnCall,
    /// Conducting general inquiries.
    Inquiries1,

    // Incident statuses, a current incident must be set.
    /// Proceeding to the current incident.
    Proceeding,
    /// On scene at the current incident.
    AtIncident,
    /// Finalising the current incident.
    Finalise,
    /// Conducting inquiries for the current incident.
    Inquiries2,

    // Specials.
    /// The resource has raised a duress alert.
    Duress,
    /// The resource is not booked on to a shift.
    OffDuty,
    /// A status outside the defined set, preserved verbatim.
    Unknown(String),
}

/// What a validated status change entails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// A reason must be supplied for the change (leaving an incident
    /// status for a general one).
    pub requires_reason: bool,
    /// The change moves from the incident family to the general family,
    /// so the current incident relationship is cleared as a distinct,
    /// explicit effect.
    pub leaves_incident: bool,
}

impl ResourceStatus {
    /// All statuses selectable from the status screen, in display order.
    pub const SELECTABLE: [Self; 12] = [
        Self::Unavailable,
        Self::OnAir,
        Self::MealBreak,
        Self::TrafficStop,
        Self::Court,
        Self::AtStation,
        Self::OnCall,
        Self::Inquiries1,
        Self::Proceeding,
        Self::AtIncident,
        Self::Finalise,
        Self::Inquiries2,
    ];

    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unavailable => "Unavailable",
            Self::OnAir => "On Air",
            Self::MealBreak => "Meal Break",
            Self::TrafficStop => "Traffic Stop",
            Self::Court => "Court",
            Self::AtStation => "At Station",
            Self::OnCall => "On Call",
            Self::Inquiries1 => "Inquiries1",
            Self::Proceeding => "Proceeding",
            Self::AtIncident => "At Incident",
            Self::Finalise => "Finalise",
            Self::Inquiries2 => "Inquiries2",
            Self::Duress => "Duress",
            Self::OffDuty => "Off Duty",
            Self::Unknown(value) => value,
        }
    }

    /// Parses a status from its wire representation.
    ///
    /// Unrecognized values become `Unknown`; parsing never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Unavailable" => Self::Unavailable,
            "On Air" => Self::OnAir,
            "Meal Break" => Self::MealBreak,
            "Traffic Stop" => Self::TrafficStop,
            "Court" => Self::Court,
            "At Station" => Self::AtStation,
            "On Call" => Self::OnCall,
            "Inquiries1" => Self::Inquiries1,
            "Proceeding" => Self::Proceeding,
            "At Incident" => Self::AtIncident,
            "Finalise" => Self::Finalise,
            "Inquiries2" => Self::Inquiries2,
            "Duress" => Self::Duress,
            "Off Duty" => Self::OffDuty,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Returns true if this status requires a current incident.
    #[must_use]
    pub const fn is_incident_status(&self) -> bool {
        matches!(
            self,
            Self::Proceeding | Self::AtIncident | Self::Finalise | Self::Inquiries2
        )
    }

    /// Returns true if this status represents a duress alert.
    #[must_use]
    pub const fn is_duress(&self) -> bool {
        matches!(self, Self::Duress)
    }

    /// Returns true if a shift may be terminated from this status.
    ///
    /// Incident statuses and duress block termination; everything else,
    /// including unrecognized statuses, allows it. A live incident
    /// assignment is checked separately by the session.
    #[must_use]
    pub const fn can_terminate(&self) -> bool {
        !self.is_incident_status() && !self.is_duress()
    }

    /// Returns true if a new incident can be created from this status.
    #[must_use]
    pub const fn can_create_incident(&self) -> bool {
        !self.is_incident_status()
    }

    /// Returns true if a resource holding this status appears on the map.
    ///
    /// Off-duty resources are the only ones hidden.
    #[must_use]
    pub const fn shown_on_map(&self) -> bool {
        !matches!(self, Self::OffDuty)
    }

    /// Returns true if moving from this status to `new_status` leaves the
    /// incident family for the general family.
    #[must_use]
    pub const fn leaves_incident_for(&self, new_status: &Self) -> bool {
        self.is_incident_status() && !new_status.is_incident_status()
    }

    /// Validates a change from this status to `new_status`.
    ///
    /// `has_current_incident` reflects whether the resource will have a
    /// current incident at the time the new status takes effect (either
    /// already set, or supplied alongside the change).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StatusUnchanged` when the statuses match, and
    /// `DomainError::IncidentRequired` when an incident-family status is
    /// requested without a current incident.
    pub fn change_to(
        &self,
        new_status: &Self,
        has_current_incident: bool,
    ) -> Result<StatusChange, DomainError> {
        if self == new_status {
            return Err(DomainError::StatusUnchanged {
                status: new_status.as_str().to_owned(),
            });
        }

        if new_status.is_incident_status() && !has_current_incident {
            return Err(DomainError::IncidentRequired {
                status: new_status.as_str().to_owned(),
            });
        }

        let leaves_incident: bool = self.leaves_incident_for(new_status);
        Ok(StatusChange {
            // Leaving an incident for a general status needs a reason.
            requires_reason: leaves_incident,
            leaves_incident,
        })
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ResourceStatus {
    fn default() -> Self {
        Self::Unavailable
    }
}

impl From<String> for ResourceStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ResourceStatus> for String {
    fn from(status: ResourceStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// Derived status of an incident relative to the logged-in user.
///
/// This is computed from the relationships inside a snapshot and is never
/// stored on the incident record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    /// No resource is assigned to the incident.
    Unresourced,
    /// At least one resource is assigned, none of them the user's.
    Resourced,
    /// The user's resource is assigned, but the incident is not its
    /// current incident.
    Assigned,
    /// The incident is the user's resource's current incident.
    Current,
}

impl IncidentStatus {
    /// Returns the display representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unresourced => "Unresourced",
            Self::Resourced => "Resourced",
            Self::Assigned => "Assigned",
            Self::Current => "Current",
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
