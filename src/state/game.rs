//! Game-session state for the current puzzle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This record is the local projection of the backend's puzzle: exactly the
//! last successfully decoded snapshot plus a request-in-flight flag. The
//! client never mutates cell values; the only writes are wholesale snapshot
//! replacement and the loading toggle.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use crate::net::types::{Board, Snapshot};

/// View state for the puzzle page: last snapshot and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    /// Last board received from the backend; `None` until the first
    /// successful `start`.
    pub board: Option<Board>,
    /// Server-asserted terminal flag from the last snapshot.
    pub finished: bool,
    /// True while a `start` or `advance` request is in flight.
    pub loading: bool,
}

impl GameState {
    /// Replace board and finished flag with a freshly decoded snapshot.
    ///
    /// This is the only path that writes `board`/`finished`, so a failed
    /// request can never leave partially merged state behind.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.board = Some(snapshot.board);
        self.finished = snapshot.finished;
    }

    /// Whether the start control is disabled.
    ///
    /// Start is a one-shot new-game trigger: blocked while a request is in
    /// flight or while an unfinished game is on screen, available again once
    /// the game finishes.
    pub fn start_disabled(&self) -> bool {
        self.loading || (!self.finished && self.board.is_some())
    }

    /// Whether the advance control is disabled.
    ///
    /// Advancing needs an active, unfinished game.
    pub fn advance_disabled(&self) -> bool {
        self.loading || self.board.is_none() || self.finished
    }
}
