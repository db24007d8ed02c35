//! Text shown to players

use crate::tictactoe::{MoveOutcome, Player};

use super::{GameMode, Session};

/// Message announcing a finished game, `None` while the game continues.
///
/// Single-player results are told from the human's (X's) point of view.
pub fn result_message(outcome: MoveOutcome, mode: GameMode) -> Option<String> {
    let message = match (outcome, mode) {
        (MoveOutcome::Continue, _) => return None,
        (MoveOutcome::Draw, _) => "Draw".to_string(),
        (MoveOutcome::Win(Player::X), GameMode::SinglePlayer) => "You won!".to_string(),
        (MoveOutcome::Win(Player::O), GameMode::SinglePlayer) => {
            "You lost. Better luck next time!".to_string()
        }
        (MoveOutcome::Win(winner), GameMode::TwoPlayer) => format!("Winner: {winner}"),
    };
    Some(message)
}

/// Status line under the board: the next player, or empty once the game is over
pub fn status_line(session: &Session) -> String {
    if session.is_over() {
        String::new()
    } else {
        format!("Next player: {}", session.to_move())
    }
}
