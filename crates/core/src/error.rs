// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cad_transport::TransportError;

/// Errors that can occur refreshing the snapshot store.
///
/// `Clone` because a coalesced refresh shares one result among every
/// caller that joined it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The transport layer failed; the previous snapshot is retained.
    Transport(TransportError),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Sync failed: {err}"),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<TransportError> for SyncError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}
