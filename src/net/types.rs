//! Wire-protocol DTOs for the puzzle backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads exactly; the client treats
//! the backend contract as authoritative and never infers puzzle rules from
//! board contents.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Rectangular grid of tile values. `0` denotes the empty cell; any other
/// value is a numbered tile. Dimensions are whatever the backend sends.
pub type Board = Vec<Vec<u8>>;

/// One board snapshot as returned by `GET /start` and `GET /next`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current board layout.
    pub board: Board,
    /// Whether the server considers the puzzle solved.
    pub finished: bool,
}

/// The single failure kind for snapshot requests.
///
/// Transport errors and body-decoding errors funnel into the same type; the
/// caller logs them identically and leaves the rendered state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request failed: {reason}")]
pub struct RequestFailure {
    reason: String,
}

impl RequestFailure {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub(crate) fn from_status(status: u16) -> Self {
        Self::new(format!("status {status}"))
    }
}
