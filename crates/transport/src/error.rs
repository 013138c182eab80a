// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur talking to the CAD backend.
///
/// Variants carry message strings rather than source errors so the type
/// stays `Clone`: a coalesced refresh shares one result among every
/// caller that joined it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Could not reach the backend.
    #[error("Failed to connect to the CAD backend: {0}")]
    Connect(String),
    /// The request timed out.
    #[error("Request to the CAD backend timed out: {0}")]
    Timeout(String),
    /// The backend answered with a non-success status.
    #[error("CAD backend returned {status}: {message}")]
    Backend {
        /// The HTTP status code.
        status: u16,
        /// The response body, when one was readable.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("Failed to decode CAD backend response: {0}")]
    Decode(String),
    /// The request could not be built or sent.
    #[error("CAD backend request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}
