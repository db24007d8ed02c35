//! Common test utilities for the noughts test suite.
//!
//! This module generates reachable positions by random play.

#![allow(dead_code)]

use noughts::{
    Board, GameMode, Session,
    opponent::{Difficulty, random::random_move},
};
use rand::{Rng, rngs::StdRng};

/// Parse a board literal, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).expect("test board literal should parse")
}

/// Play a random number of random moves from the start.
///
/// # Returns
///
/// A two-player session that may or may not be finished
pub fn random_session(rng: &mut StdRng) -> Session {
    let mut session = Session::new(GameMode::TwoPlayer, Difficulty::Easy);
    let plies = rng.random_range(0..=9);
    for _ in 0..plies {
        if session.is_over() {
            break;
        }
        let Some(index) = random_move(session.board(), rng) else {
            break;
        };
        session
            .apply_move(index)
            .expect("random move on an unfinished game should apply");
    }
    session
}

/// Brute-force win check straight from the grid geometry.
pub fn has_line(board: &Board, cell: noughts::Cell) -> bool {
    let at = |row: usize, col: usize| board.get(row * 3 + col) == Some(cell);
    let rows = (0..3).any(|r| (0..3).all(|c| at(r, c)));
    let cols = (0..3).any(|c| (0..3).all(|r| at(r, c)));
    let diag = (0..3).all(|i| at(i, i));
    let anti = (0..3).all(|i| at(i, 2 - i));
    rows || cols || diag || anti
}
