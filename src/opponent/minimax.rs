//! Exhaustive minimax search for the computer opponent.
//!
//! O is the maximizing player and X the minimizing one. Terminal positions
//! score +10 for an O win, -10 for an X win and 0 for a draw, with no
//! preference for shorter or longer games. The search walks the full game
//! tree from the given position, placing and removing marks on a single
//! board buffer.

use crate::tictactoe::{Board, Cell, Player};

/// Score of a position won by O
pub const WIN_SCORE: i32 = 10;

/// A candidate move and the minimax value of playing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// `None` for terminal positions, where no move is generated
    pub index: Option<usize>,
    pub score: i32,
}

impl ScoredMove {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

/// Best move for O on `board`, or `None` when the board is full.
///
/// Ties are broken by the lowest cell index.
pub fn best_move(board: &Board) -> Option<usize> {
    best_move_for(board, Player::O)
}

/// Best move for `player` on `board`.
///
/// X picks the first move with the lowest score, O the first with the
/// highest. Returns `None` when the position is already decided or full.
pub fn best_move_for(board: &Board, player: Player) -> Option<usize> {
    let mut scratch = *board;
    search(&mut scratch, player).index
}

/// Minimax value of `board` with `to_move` to play
pub fn evaluate(board: &Board, to_move: Player) -> i32 {
    let mut scratch = *board;
    search(&mut scratch, to_move).score
}

fn search(board: &mut Board, player: Player) -> ScoredMove {
    if board.has_won(Player::X) {
        return ScoredMove::terminal(-WIN_SCORE);
    }
    if board.has_won(Player::O) {
        return ScoredMove::terminal(WIN_SCORE);
    }
    let available = board.empty_cells();
    if available.is_empty() {
        return ScoredMove::terminal(0);
    }

    let mut best: Option<ScoredMove> = None;
    for index in available {
        board.set(index, player.to_cell());
        let score = search(board, player.opponent()).score;
        board.set(index, Cell::Empty);

        // Strict comparison keeps the first of equally scored moves
        let improves = match best {
            None => true,
            Some(current) => match player {
                Player::O => score > current.score,
                Player::X => score < current.score,
            },
        };
        if improves {
            best = Some(ScoredMove {
                index: Some(index),
                score,
            });
        }
    }

    best.unwrap_or(ScoredMove::terminal(0))
}
