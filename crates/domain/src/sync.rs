// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::broadcast::Broadcast;
use crate::incident::Incident;
use crate::officer::Officer;
use crate::patrol::Patrol;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// The raw aggregate of a full snapshot pull, before indexing.
///
/// The backend returns every entity visible to the requested scope in a
/// single response; the core crate turns this into an indexed, immutable
/// snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Incidents, in backend order.
    #[serde(default)]
    pub incidents: Vec<Incident>,
    /// Resources, in backend order.
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Officers, in backend order.
    #[serde(default)]
    pub officers: Vec<Officer>,
    /// Patrols, in backend order.
    #[serde(default)]
    pub patrols: Vec<Patrol>,
    /// Broadcasts, in backend order.
    #[serde(default)]
    pub broadcasts: Vec<Broadcast>,
}

impl SyncPayload {
    /// Returns true if the payload contains no entities at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
            && self.resources.is_empty()
            && self.officers.is_empty()
            && self.patrols.is_empty()
            && self.broadcasts.is_empty()
    }
}
