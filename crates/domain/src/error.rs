// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A callsign is empty or otherwise invalid.
    InvalidCallsign(String),
    /// A status requiring a current incident was requested without one.
    IncidentRequired {
        /// The requested status, as its wire value.
        status: String,
    },
    /// The requested status matches the resource's current status.
    StatusUnchanged {
        /// The status, as its wire value.
        status: String,
    },
    /// Shift termination is not permitted from the current status.
    TerminationBlockedByStatus {
        /// The current status, as its wire value.
        status: String,
    },
    /// Shift termination is not permitted while an incident is assigned.
    TerminationBlockedByIncident {
        /// The booked-on callsign.
        callsign: String,
        /// The incident number still assigned.
        incident_number: String,
    },
    /// A book-on request listed no officers.
    EmptyOfficerList {
        /// The callsign being booked on.
        callsign: String,
    },
    /// A book-on shift window ends at or before it starts.
    InvalidShiftWindow {
        /// The callsign being booked on.
        callsign: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCallsign(msg) => write!(f, "Invalid callsign: {msg}"),
            Self::IncidentRequired { status } => {
                write!(
                    f,
                    "The status '{status}' requires a current incident to be set"
                )
            }
            Self::StatusUnchanged { status } => {
                write!(f, "The call sign status is already '{status}'")
            }
            Self::TerminationBlockedByStatus { status } => {
                write!(
                    f,
                    "Your call sign is currently responding to an active incident that must \
                     first be finalised (status is '{status}')"
                )
            }
            Self::TerminationBlockedByIncident {
                callsign,
                incident_number,
            } => {
                write!(
                    f,
                    "Call sign '{callsign}' is still assigned to incident \
                     {incident_number}; the incident must first be finalised"
                )
            }
            Self::EmptyOfficerList { callsign } => {
                write!(f, "Book on for '{callsign}' requires at least one officer")
            }
            Self::InvalidShiftWindow { callsign } => {
                write!(
                    f,
                    "Book on for '{callsign}' requires the shift end to be after the shift start"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
