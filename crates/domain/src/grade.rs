// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Incident grades (priorities) and their display badges.

use serde::{Deserialize, Serialize};

/// Incident priority grade, P1 (highest) through P4 (lowest).
///
/// Grades outside the defined set are preserved verbatim in `Other` so
/// that filters and displays never silently drop a value the client was
/// not built to classify.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncidentGrade {
    /// Priority 1, most urgent.
    P1,
    /// Priority 2.
    P2,
    /// Priority 3.
    P3,
    /// Priority 4, least urgent.
    P4,
    /// A grade outside the defined set, preserved verbatim.
    Other(String),
}

/// Display badge for a grade: color and whether the pin is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBadge {
    /// Badge color as a hex RGB string.
    pub color: &'static str,
    /// Whether the map pin renders filled rather than outlined.
    pub filled: bool,
}

impl IncidentGrade {
    /// Returns the wire representation of the grade.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::Other(value) => value,
        }
    }

    /// Parses a grade from its wire representation.
    ///
    /// Unrecognized values become `Other`; parsing never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "P1" => Self::P1,
            "P2" => Self::P2,
            "P3" => Self::P3,
            "P4" => Self::P4,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the display badge for this grade.
    #[must_use]
    pub const fn badge(&self) -> GradeBadge {
        match self {
            Self::P1 => GradeBadge {
                color: "#FF3B30",
                filled: true,
            },
            Self::P2 => GradeBadge {
                color: "#FF9500",
                filled: true,
            },
            Self::P3 => GradeBadge {
                color: "#4C9A2A",
                filled: false,
            },
            Self::P4 | Self::Other(_) => GradeBadge {
                color: "#8E8E93",
                filled: false,
            },
        }
    }

    /// Returns the sort rank of the grade, lower is more urgent.
    ///
    /// Grades outside the defined set rank below P4.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::P1 => 1,
            Self::P2 => 2,
            Self::P3 => 3,
            Self::P4 => 4,
            Self::Other(_) => 5,
        }
    }
}

impl std::fmt::Display for IncidentGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for IncidentGrade {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<IncidentGrade> for String {
    fn from(grade: IncidentGrade) -> Self {
        grade.as_str().to_owned()
    }
}

/// Returns the most urgent grade among `grades`, if any.
#[must_use]
pub fn highest_grade<'a, I>(grades: I) -> Option<&'a IncidentGrade>
where
    I: IntoIterator<Item = &'a IncidentGrade>,
{
    grades.into_iter().min_by_key(|grade| grade.rank())
}
