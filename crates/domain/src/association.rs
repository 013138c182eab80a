// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persons and vehicles associated with an incident or patrol.
//!
//! Associations are owned by their parent entity and are never persisted
//! or looked up independently.

use serde::{Deserialize, Serialize};

/// A person associated with an incident or patrol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociatedPerson {
    /// Given name.
    #[serde(default)]
    pub given_name: Option<String>,
    /// Surname.
    #[serde(default)]
    pub surname: Option<String>,
    /// Date of birth, ISO 8601 date string as transmitted.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Gender, as transmitted.
    #[serde(default)]
    pub gender: Option<String>,
    /// The system the association was sourced from.
    #[serde(default)]
    pub source: Option<String>,
}

impl AssociatedPerson {
    /// Returns "Surname, Given" when both parts are present, otherwise
    /// whichever part exists.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match (self.surname.as_deref(), self.given_name.as_deref()) {
            (Some(surname), Some(given)) => Some(format!("{surname}, {given}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_owned()),
            (None, None) => None,
        }
    }
}

/// A vehicle associated with an incident or patrol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociatedVehicle {
    /// Registration plate.
    #[serde(default)]
    pub plate: Option<String>,
    /// Vehicle type (e.g., "Sedan").
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// Color.
    #[serde(default)]
    pub color: Option<String>,
    /// Make and model.
    #[serde(default)]
    pub make_model: Option<String>,
    /// The system the association was sourced from.
    #[serde(default)]
    pub source: Option<String>,
}
