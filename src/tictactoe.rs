//! Tic-Tac-Toe rules over board snapshots

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player, empty_cells, has_won, is_full};
pub use game::MoveOutcome;
pub use lines::{LineAnalyzer, WINNING_LINES};
