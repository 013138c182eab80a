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

//! Entity model and status rules for the CAD dispatch client.
//!
//! This crate holds the plain data records transmitted by the CAD
//! backend, the callsign status state machine, and the validation rules
//! applied before any request reaches the transport layer. It performs
//! no I/O.

mod association;
mod book_on;
mod broadcast;
mod error;
mod geo;
mod grade;
mod incident;
mod officer;
mod patrol;
mod resource;
mod status;
mod sync;
mod types;

pub use association::{AssociatedPerson, AssociatedVehicle};
pub use book_on::{BookOffRequest, BookOnOfficer, BookOnRequest};
pub use broadcast::{Broadcast, BroadcastCategory};
pub use error::DomainError;
pub use geo::{BoundingBox, Coordinate, Location};
pub use grade::{GradeBadge, IncidentGrade, highest_grade};
pub use incident::{Incident, Informant};
pub use officer::Officer;
pub use patrol::Patrol;
pub use resource::{Equipment, Resource, ResourceUnitType};
pub use status::{IncidentStatus, ResourceStatus, StatusChange};
pub use sync::SyncPayload;
pub use types::{ActivityLogItem, Callsign};
