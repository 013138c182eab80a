// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Represents a callsign, the identity key of a resource.
///
/// Callsigns are normalized to uppercase to ensure case-insensitive
/// uniqueness across the snapshot indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Callsign {
    /// The callsign value (e.g., "P24").
    value: String,
}

impl Callsign {
    /// Creates a new `Callsign`, normalized to uppercase.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Creates a `Callsign` after validating it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCallsign` if the value is blank.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let callsign: Self = Self::new(value);
        if callsign.value.is_empty() {
            return Err(DomainError::InvalidCallsign(String::from(
                "callsign must not be empty",
            )));
        }
        Ok(callsign)
    }

    /// Returns the callsign value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Callsign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for Callsign {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Callsign {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<Callsign> for String {
    fn from(callsign: Callsign) -> Self {
        callsign.value
    }
}

/// An entry in an incident narrative or resource activity log.
///
/// Entries arrive ordered from the backend; ordering is preserved as
/// received and never re-derived from timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogItem {
    /// Short title of the entry (e.g., "Unit Proceeding").
    pub title: String,
    /// Longer free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// The system or channel the entry originated from.
    #[serde(default)]
    pub source: Option<String>,
    /// When the entry was recorded.
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

impl ActivityLogItem {
    /// Creates a new `ActivityLogItem`.
    #[must_use]
    pub const fn new(
        title: String,
        description: Option<String>,
        source: Option<String>,
        recorded_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            title,
            description,
            source,
            recorded_at,
        }
    }
}
