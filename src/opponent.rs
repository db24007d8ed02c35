//! Move selection for the computer opponent.
//!
//! `select_move` maps a difficulty to a policy:
//! - easy: uniform random among the empty cells
//! - medium: same as easy
//! - hard: exhaustive minimax playing O
//!
//! The [`Opponent`] trait is what a front end drives; [`ComputerOpponent`]
//! owns its random generator so a seeded opponent replays the same game.

pub mod minimax;
pub mod random;

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Strength of the computer opponent in single-player games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    /// Plays exactly like [`Difficulty::Easy`]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// Choose the computer's move on `board`.
///
/// # Errors
///
/// Returns [`crate::Error::NoValidMoves`] when the board has no empty cell.
#[instrument(level = "debug", skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize> {
    let choice = match difficulty {
        Difficulty::Easy | Difficulty::Medium => random::random_move(board, rng),
        Difficulty::Hard => minimax::best_move(board),
    };
    let index = choice.ok_or(crate::Error::NoValidMoves)?;
    debug!(index, "computer selected move");
    Ok(index)
}

/// Something that can pick a move for the side it plays
pub trait Opponent: Send {
    /// Select a move on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available.
    fn select_move(&mut self, board: &Board) -> Result<usize>;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Adjust playing strength. Opponents without levels ignore this.
    fn set_difficulty(&mut self, _difficulty: Difficulty) {}
}

/// The single-player computer opponent, playing O at a given difficulty
pub struct ComputerOpponent {
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerOpponent {
    /// Create an opponent seeded from OS entropy
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Create an opponent with a deterministic seed
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an opponent, seeded when `seed` is given
    pub fn from_seed(difficulty: Difficulty, seed: Option<u64>) -> Self {
        match seed {
            Some(value) => Self::with_seed(difficulty, value),
            None => Self::new(difficulty),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Opponent for ComputerOpponent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        select_move(board, self.difficulty, &mut self.rng)
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "Computer (easy)",
            Difficulty::Medium => "Computer (medium)",
            Difficulty::Hard => "Computer (hard)",
        }
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

/// Uniform random player, used as a sparring partner in simulations
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        random::random_move(board, &mut self.rng).ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Perfect player for either side
pub struct MinimaxOpponent {
    player: Player,
}

impl MinimaxOpponent {
    pub fn new(player: Player) -> Self {
        Self { player }
    }
}

impl Opponent for MinimaxOpponent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        minimax::best_move_for(board, self.player).ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
