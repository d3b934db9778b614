//! # Game Module
//!
//! Turn management on top of the pure board engine.
//!
//! A turn runs `Idle -> Transitioning -> SpawnPending -> Idle` when the move
//! changed the board and `Idle -> Transitioning -> Idle` when it did not.

pub mod state;

pub use state::*;

use crate::board::Tile;
use serde::{Deserialize, Serialize};

/// Result of applying one move to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The board changed and a new tile was spawned.
    Moved { spawned: Tile },
    /// The move left every tile in place; nothing spawned.
    Unchanged,
}

impl TurnOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, TurnOutcome::Moved { .. })
    }
}
