//! Uniform random move choice

use rand::{Rng, prelude::IndexedRandom};

use crate::tictactoe::Board;

/// Pick any empty cell with equal probability, `None` when the board is full
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}
