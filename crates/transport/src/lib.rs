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

//! Backend transport boundary for the CAD dispatch client.
//!
//! The core consumes the CAD backend through the [`CadTransport`] trait:
//! a full snapshot pull plus the shift and status submission calls. The
//! concrete [`HttpTransport`] talks JSON over HTTP; tests substitute
//! in-memory implementations.

mod error;
mod http;
mod request;

use async_trait::async_trait;
use cad_domain::{BookOffRequest, BookOnRequest, Officer, SyncPayload};

pub use error::TransportError;
pub use http::{HttpTransport, HttpTransportConfig};
pub use request::{StatusChangeRequest, SyncRequest};

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The abstract boundary to the CAD backend.
///
/// Implementations must be safe to share across tasks; the snapshot
/// store and the session hold one behind an `Arc`.
#[async_trait]
pub trait CadTransport: Send + Sync {
    /// Pulls a full snapshot of all entities visible to `request`.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on any network or backend failure. The
    /// caller (the snapshot store) keeps serving the last good snapshot.
    async fn fetch_snapshot(&self, request: &SyncRequest) -> Result<SyncPayload, TransportError>;

    /// Submits a callsign status change.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on failure; the caller leaves local
    /// state untouched and surfaces the error verbatim.
    async fn submit_status_change(
        &self,
        request: &StatusChangeRequest,
    ) -> Result<(), TransportError>;

    /// Books a callsign on to a shift.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on failure.
    async fn book_on(&self, request: &BookOnRequest) -> Result<(), TransportError>;

    /// Books a callsign off its shift.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on failure.
    async fn book_off(&self, request: &BookOffRequest) -> Result<(), TransportError>;

    /// Fetches the details of the officer identified by `payroll_id`.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on failure.
    async fn fetch_employee_details(&self, payroll_id: &str) -> Result<Officer, TransportError>;
}
