// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Snapshot store, status derivation and filter evaluation for the CAD
//! dispatch client.
//!
//! The store pulls whole snapshots through the transport boundary,
//! indexes them, and swaps them atomically; derivation and filtering are
//! pure functions over the immutable snapshot values. Change
//! notifications publish through the [`EventBus`] strictly after the
//! state they describe.

mod derive;
mod error;
mod events;
mod filter;
mod snapshot;
mod store;

#[cfg(test)]
mod tests;

pub use derive::{incident_has_duress, incident_status};
pub use error::SyncError;
pub use events::{CadEvent, EventBus};
pub use filter::{
    FilterContext, FilterDefaults, IncidentsFilter, PriorityToggles, ResourcedToggles,
    ResourcesFilter, TaskAnnotation, TaskCategory, TaskFilter,
};
pub use snapshot::Snapshot;
pub use store::SnapshotStore;
