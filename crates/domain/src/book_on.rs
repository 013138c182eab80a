// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Book-on and book-off requests: the record of a callsign starting and
//! ending a shift.

use crate::error::DomainError;
use crate::resource::Equipment;
use crate::types::Callsign;
use serde::{Deserialize, Serialize};

/// An officer included in a book-on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookOnOfficer {
    /// The officer's payroll id.
    pub payroll_id: String,
    /// Capabilities the officer brings to the shift.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Licence classification, if relevant for the unit.
    #[serde(default)]
    pub licence_type: Option<String>,
}

impl BookOnOfficer {
    /// Creates a new `BookOnOfficer` with no capabilities.
    #[must_use]
    pub const fn new(payroll_id: String) -> Self {
        Self {
            payroll_id,
            capabilities: Vec::new(),
            licence_type: None,
        }
    }
}

/// A request to book a callsign on to a shift.
///
/// The record lives for one shift: it is created at book-on and replaced
/// (cleared) at book-off or shift termination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookOnRequest {
    /// The callsign being booked on.
    pub callsign: Callsign,
    /// Shift start time.
    pub shift_start: chrono::DateTime<chrono::Utc>,
    /// Shift end time; must be after `shift_start`.
    pub shift_end: chrono::DateTime<chrono::Utc>,
    /// Officers on the shift; must not be empty.
    pub officers: Vec<BookOnOfficer>,
    /// Equipment selection for the shift.
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    /// Vehicle odometer reading at book-on.
    #[serde(default)]
    pub odometer: Option<u32>,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: Option<String>,
}

impl BookOnRequest {
    /// Validates the request before it is sent to the transport layer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyOfficerList` when no officers are
    /// listed, and `DomainError::InvalidShiftWindow` when the shift end
    /// is not after the shift start.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.officers.is_empty() {
            return Err(DomainError::EmptyOfficerList {
                callsign: self.callsign.value().to_owned(),
            });
        }
        if self.shift_end <= self.shift_start {
            return Err(DomainError::InvalidShiftWindow {
                callsign: self.callsign.value().to_owned(),
            });
        }
        Ok(())
    }

    /// Returns the payroll ids of the officers on the shift.
    #[must_use]
    pub fn payroll_ids(&self) -> Vec<&str> {
        self.officers
            .iter()
            .map(|officer| officer.payroll_id.as_str())
            .collect()
    }
}

/// A request to book a callsign off its shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookOffRequest {
    /// The callsign being booked off.
    pub callsign: Callsign,
}

impl BookOffRequest {
    /// Creates a new `BookOffRequest`.
    #[must_use]
    pub const fn new(callsign: Callsign) -> Self {
        Self { callsign }
    }
}
