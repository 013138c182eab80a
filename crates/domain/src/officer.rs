// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// An officer, identified by payroll id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Officer {
    /// The payroll id, the officer's identity key.
    pub payroll_id: String,
    /// Given name.
    #[serde(default)]
    pub given_name: Option<String>,
    /// Surname.
    #[serde(default)]
    pub surname: Option<String>,
    /// Rank (e.g., "Senior Constable").
    #[serde(default)]
    pub rank: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Capabilities held by the officer (e.g., "General Duties").
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Officer {
    /// Returns "Surname, Given" when both parts are present, otherwise
    /// whichever part exists, otherwise the payroll id.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.surname.as_deref(), self.given_name.as_deref()) {
            (Some(surname), Some(given)) => format!("{surname}, {given}"),
            (Some(name), None) | (None, Some(name)) => name.to_owned(),
            (None, None) => self.payroll_id.clone(),
        }
    }
}
