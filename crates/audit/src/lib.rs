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

//! In-memory activity log for the CAD dispatch client.
//!
//! Every successful local mutation (book on, book off, callsign status
//! change) appends exactly one record. The log lives for the session and
//! is never persisted; historical audit storage belongs to the backend.

use cad_domain::Callsign;

/// The entity performing an action: the logged-in officer, or the system
/// itself for automatic operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The payroll id or system identifier of the actor.
    pub id: String,
    /// The type of actor (e.g., "officer", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new `Actor`.
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Creates an officer actor from a payroll id.
    #[must_use]
    pub fn officer(payroll_id: &str) -> Self {
        Self::new(payroll_id.to_owned(), String::from("officer"))
    }

    /// Creates the system actor.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from("system"), String::from("system"))
    }
}

/// The action performed on a callsign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`BookOn`", "`UpdateStatus`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new `Action`.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// An immutable record of one successful local mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Who performed the action.
    pub actor: Actor,
    /// The callsign the action applied to.
    pub callsign: Callsign,
    /// What was done.
    pub action: Action,
    /// The callsign's operational status before the action, as its wire
    /// value, when known.
    pub status_before: Option<String>,
    /// The callsign's operational status after the action, as its wire
    /// value, when known.
    pub status_after: Option<String>,
    /// When the record was created.
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

impl ActivityRecord {
    /// Creates a new `ActivityRecord` stamped with the current time.
    #[must_use]
    pub fn new(
        actor: Actor,
        callsign: Callsign,
        action: Action,
        status_before: Option<String>,
        status_after: Option<String>,
    ) -> Self {
        Self {
            actor,
            callsign,
            action,
            status_before,
            status_after,
            recorded_at: chrono::Utc::now(),
        }
    }
}

/// An append-only, in-memory log of activity records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<ActivityRecord>,
}

impl ActivityLog {
    /// Creates a new empty `ActivityLog`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a record to the log.
    pub fn append(&mut self, record: ActivityRecord) {
        self.entries.push(record);
    }

    /// Returns the records in append order.
    #[must_use]
    pub fn entries(&self) -> &[ActivityRecord] {
        &self.entries
    }

    /// Returns the number of records in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
