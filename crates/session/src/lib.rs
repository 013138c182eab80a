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

//! Session service for the CAD dispatch client.
//!
//! [`CadSession`] owns the snapshot store, the event bus and the
//! in-memory activity log for one logged-in session. It validates every
//! mutation locally before contacting the backend, so illegal status
//! transitions never produce partial server-side effects.

mod error;
mod session;

#[cfg(test)]
mod tests;

pub use error::{SessionError, translate_domain_error};
pub use session::{CadSession, SyncMode};
