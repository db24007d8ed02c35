//! Game configuration.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    opponent::{ComputerOpponent, Difficulty},
    session::{GameMode, Session},
};

/// Longest accepted pause before the computer replies
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

/// Settings chosen before or between games.
///
/// # Examples
///
/// ```
/// use noughts::app::GameConfig;
/// use noughts::{Difficulty, GameMode};
///
/// let config = GameConfig::new(GameMode::SinglePlayer)
///     .with_difficulty(Difficulty::Hard)
///     .with_seed(42)
///     .with_delay_ms(0);
/// let session = config.session();
/// assert!(!session.is_computer_turn());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Two players at one board, or one player against the computer
    pub mode: GameMode,
    /// Computer strength (single-player only)
    pub difficulty: Difficulty,
    /// Random seed for the computer (None = non-deterministic)
    pub seed: Option<u64>,
    /// Pause before the computer's reply, for pacing only
    pub computer_delay_ms: u64,
}

impl GameConfig {
    /// Create a configuration for the given mode.
    ///
    /// Uses default values for other parameters:
    /// - Difficulty: `Difficulty::Easy`
    /// - Seed: None (non-deterministic)
    /// - Computer delay: 500 ms
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            difficulty: Difficulty::default(),
            seed: None,
            computer_delay_ms: 500,
        }
    }

    /// Set the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the computer difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the computer reply delay in milliseconds.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or fails
    /// [`GameConfig::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns error if the computer delay exceeds [`MAX_COMPUTER_DELAY_MS`].
    pub fn validate(&self) -> Result<()> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "computer_delay_ms {} exceeds {MAX_COMPUTER_DELAY_MS}",
                    self.computer_delay_ms
                ),
            });
        }
        Ok(())
    }

    /// A fresh session with this mode and difficulty
    pub fn session(&self) -> Session {
        Session::new(self.mode, self.difficulty)
    }

    /// The computer opponent for this difficulty and seed
    pub fn opponent(&self) -> ComputerOpponent {
        ComputerOpponent::from_seed(self.difficulty, self.seed)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
