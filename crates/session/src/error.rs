// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session layer.

use cad_core::SyncError;
use cad_domain::DomainError;
use cad_transport::TransportError;

/// Session-level errors.
///
/// These are distinct from domain/transport errors and represent the
/// contract exposed to display collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The operation requires a booked-on callsign.
    NotBookedOn,
    /// A domain rule was violated; nothing was sent to the backend.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The booked-on callsign is not present in the current snapshot.
    ResourceNotFound {
        /// The callsign that could not be resolved.
        callsign: String,
    },
    /// The transport layer failed; local state is unchanged.
    Transport(TransportError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotBookedOn => {
                write!(f, "No callsign is booked on")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound { callsign } => {
                write!(f, "Callsign '{callsign}' is not in the current snapshot")
            }
            Self::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<TransportError> for SessionError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<SyncError> for SessionError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Transport(transport_err) => Self::Transport(transport_err),
        }
    }
}

/// Translates a domain error into a session error.
///
/// The translation is explicit so domain errors are never leaked
/// directly across the session boundary.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> SessionError {
    let rule: &str = match &err {
        DomainError::InvalidCallsign(_) => "valid_callsign",
        DomainError::IncidentRequired { .. } => "incident_required",
        DomainError::StatusUnchanged { .. } => "status_unchanged",
        DomainError::TerminationBlockedByStatus { .. }
        | DomainError::TerminationBlockedByIncident { .. } => "termination_blocked",
        DomainError::EmptyOfficerList { .. } => "book_on_officers",
        DomainError::InvalidShiftWindow { .. } => "book_on_shift_window",
    };
    SessionError::DomainRuleViolation {
        rule: String::from(rule),
        message: err.to_string(),
    }
}
