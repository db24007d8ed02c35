//! Tic-Tac-Toe for one or two players.
//!
//! This crate provides:
//! - Rules over a board snapshot (wins, full board, empty cells)
//! - A session state machine that applies moves and detects the end of a game
//! - A computer opponent with easy, medium and hard (minimax) play
//! - Configuration and a terminal front end

pub mod app;
pub mod cli;
pub mod error;
pub mod opponent;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use opponent::{ComputerOpponent, Difficulty, Opponent, select_move};
pub use session::{GameMode, Session};
pub use tictactoe::{Board, Cell, MoveOutcome, Player};
