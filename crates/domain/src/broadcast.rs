// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::geo::Location;
use crate::types::ActivityLogItem;
use serde::{Deserialize, Serialize};

/// The category of a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BroadcastCategory {
    /// A safety or situational alert.
    Alert,
    /// A planned event (road closure, demonstration).
    Event,
    /// A be-on-the-lookout notice.
    BeOnLookout,
    /// A category outside the defined set, preserved verbatim.
    Other(String),
}

impl BroadcastCategory {
    /// Returns the wire representation of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alert => "Alert",
            Self::Event => "Event",
            Self::BeOnLookout => "BOLF",
            Self::Other(value) => value,
        }
    }

    /// Parses a category from its wire representation; never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Alert" => Self::Alert,
            "Event" => Self::Event,
            "BOLF" => Self::BeOnLookout,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for BroadcastCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BroadcastCategory> for String {
    fn from(category: BroadcastCategory) -> Self {
        category.as_str().to_owned()
    }
}

/// A broadcast: information pushed to all units, without resource
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    /// The display key of the broadcast.
    pub identifier: String,
    /// Short title.
    #[serde(default)]
    pub title: Option<String>,
    /// Broadcast category.
    #[serde(default)]
    pub category: Option<BroadcastCategory>,
    /// Where the broadcast applies, if anywhere specific.
    #[serde(default)]
    pub location: Option<Location>,
    /// Free-text details.
    #[serde(default)]
    pub details: Option<String>,
    /// When the broadcast was created.
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// When the backend last updated the broadcast.
    #[serde(default)]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    /// The narrative, in backend order.
    #[serde(default)]
    pub narrative: Vec<ActivityLogItem>,
}

impl Broadcast {
    /// Returns the coordinate of the broadcast, if located.
    #[must_use]
    pub fn coordinate(&self) -> Option<crate::geo::Coordinate> {
        self.location.as_ref().and_then(|location| location.coordinate)
    }

    /// List/annotation title: the title, falling back to the identifier.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(self.identifier.as_str())
    }
}
