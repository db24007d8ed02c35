//! Move outcomes

use serde::{Deserialize, Serialize};

use super::board::Player;

/// Result of the position after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    Continue,
    Win(Player),
    Draw,
}

impl MoveOutcome {
    /// Whether the game has ended
    pub fn is_terminal(self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }

    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            MoveOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}
