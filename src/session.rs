//! Game session state machine.
//!
//! A [`Session`] owns the board, the player to move, the mode and difficulty,
//! and the game-over flag. It is changed only through [`Session::apply_move`]
//! and [`Session::reset`]; illegal moves are rejected before anything is
//! mutated. Each session is an independent value, so any number of games can
//! run side by side.

pub mod messages;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Result,
    opponent::{Difficulty, Opponent},
    tictactoe::{Board, MoveOutcome, Player},
};

/// Who controls the two marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    /// X is the human, O the computer
    SinglePlayer,
}

impl GameMode {
    /// Mark played by the computer, if there is one
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::SinglePlayer => Some(Player::O),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameMode::TwoPlayer => "two-player",
            GameMode::SinglePlayer => "single-player",
        };
        f.write_str(label)
    }
}

impl FromStr for GameMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-player" | "two_player" | "two" | "2p" | "2" => Ok(GameMode::TwoPlayer),
            "single-player" | "single_player" | "single" | "1p" | "1" => {
                Ok(GameMode::SinglePlayer)
            }
            _ => Err(crate::Error::ParseGameMode {
                input: s.to_string(),
                expected: "single-player/single/1p, two-player/two/2p".to_string(),
            }),
        }
    }
}

/// A game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    board: Board,
    to_move: Player,
    mode: GameMode,
    difficulty: Difficulty,
    game_over: bool,
}

impl Session {
    /// Start a fresh game: empty board, X to move
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Session {
            board: Board::new(),
            to_move: Player::X,
            mode,
            difficulty,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Outcome of the current position, derived from the board
    pub fn outcome(&self) -> MoveOutcome {
        self.board.outcome()
    }

    /// Place the current player's mark at `index`.
    ///
    /// # Errors
    ///
    /// The move is rejected, with the session left unchanged, when the game
    /// is over, `index` is off the board, or the cell is taken. Front ends
    /// that filter input beforehand may ignore the error.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome> {
        if let Err(err) = self.check_move(index) {
            debug!(index, %err, "move rejected");
            return Err(err);
        }

        let player = self.to_move;
        self.board.set(index, player.to_cell());
        self.to_move = player.opponent();

        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            self.game_over = true;
        }
        trace!(index, %player, ?outcome, "move applied");
        Ok(outcome)
    }

    fn check_move(&self, index: usize) -> Result<()> {
        if self.game_over {
            return Err(crate::Error::GameOver);
        }
        if index >= 9 {
            return Err(crate::Error::InvalidPosition { position: index });
        }
        if !self.board.is_empty(index) {
            return Err(crate::Error::CellOccupied { position: index });
        }
        Ok(())
    }

    /// Return to an empty board with X to move. Mode and difficulty are kept.
    pub fn reset(&mut self) {
        *self = Session::new(self.mode, self.difficulty);
    }

    /// Switch mode and start a new game
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Change difficulty; the game in progress continues
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Whether the computer should move next
    pub fn is_computer_turn(&self) -> bool {
        !self.game_over && self.mode.computer() == Some(self.to_move)
    }

    /// Let `opponent` play if it is the computer's turn, at the session's
    /// difficulty.
    ///
    /// Returns `Ok(None)` without consulting the opponent otherwise.
    pub fn play_computer_turn(
        &mut self,
        opponent: &mut dyn Opponent,
    ) -> Result<Option<(usize, MoveOutcome)>> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        opponent.set_difficulty(self.difficulty);
        let index = opponent.select_move(&self.board)?;
        let outcome = self.apply_move(index)?;
        Ok(Some((index, outcome)))
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(GameMode::default(), Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ComputerOpponent;

    #[test]
    fn new_session_awaits_x() {
        let session = Session::new(GameMode::TwoPlayer, Difficulty::Easy);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.to_move(), Player::X);
        assert!(!session.is_over());
        assert_eq!(session.outcome(), MoveOutcome::Continue);
    }

    #[test]
    fn apply_move_places_mark_and_flips_turn() {
        let mut session = Session::new(GameMode::TwoPlayer, Difficulty::Easy);
        assert_eq!(session.apply_move(4).unwrap(), MoveOutcome::Continue);
        assert_eq!(session.board().get(4), Some(crate::tictactoe::Cell::X));
        assert_eq!(session.to_move(), Player::O);
    }

    #[test]
    fn rejected_moves_leave_state_unchanged() {
        let mut session = Session::new(GameMode::TwoPlayer, Difficulty::Easy);
        session.apply_move(0).unwrap();
        let before = session.clone();

        assert!(matches!(
            session.apply_move(0),
            Err(crate::Error::CellOccupied { position: 0 })
        ));
        assert!(matches!(
            session.apply_move(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let mut session = Session::new(GameMode::TwoPlayer, Difficulty::Easy);
        for idx in [0, 3, 1, 4, 2] {
            session.apply_move(idx).unwrap();
        }
        assert!(session.is_over());
        let before = session.clone();
        assert!(matches!(session.apply_move(8), Err(crate::Error::GameOver)));
        assert_eq!(session, before);
    }

    #[test]
    fn reset_keeps_configuration() {
        let mut session = Session::new(GameMode::SinglePlayer, Difficulty::Hard);
        session.apply_move(0).unwrap();
        session.reset();
        assert_eq!(session, Session::new(GameMode::SinglePlayer, Difficulty::Hard));
    }

    #[test]
    fn set_mode_restarts_the_game() {
        let mut session = Session::new(GameMode::TwoPlayer, Difficulty::Easy);
        session.apply_move(4).unwrap();
        session.set_mode(GameMode::SinglePlayer);
        assert_eq!(session.mode(), GameMode::SinglePlayer);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn set_difficulty_keeps_the_board() {
        let mut session = Session::new(GameMode::SinglePlayer, Difficulty::Easy);
        session.apply_move(4).unwrap();
        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.board().occupied_count(), 1);
    }

    #[test]
    fn computer_turn_only_in_single_player_for_o() {
        let mut single = Session::new(GameMode::SinglePlayer, Difficulty::Easy);
        assert!(!single.is_computer_turn());
        single.apply_move(0).unwrap();
        assert!(single.is_computer_turn());

        let mut two = Session::new(GameMode::TwoPlayer, Difficulty::Easy);
        two.apply_move(0).unwrap();
        assert!(!two.is_computer_turn());
    }

    #[test]
    fn play_computer_turn_skips_when_not_its_turn() {
        let mut session = Session::new(GameMode::SinglePlayer, Difficulty::Hard);
        let mut opponent = ComputerOpponent::with_seed(Difficulty::Hard, 1);
        assert_eq!(session.play_computer_turn(&mut opponent).unwrap(), None);

        session.apply_move(0).unwrap();
        let (index, outcome) = session.play_computer_turn(&mut opponent).unwrap().unwrap();
        assert_eq!(index, 4);
        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn parse_game_mode() {
        assert_eq!("single".parse::<GameMode>().unwrap(), GameMode::SinglePlayer);
        assert_eq!("2P".parse::<GameMode>().unwrap(), GameMode::TwoPlayer);
        assert_eq!(
            GameMode::TwoPlayer.to_string().parse::<GameMode>().unwrap(),
            GameMode::TwoPlayer
        );
        assert!(matches!(
            "online".parse::<GameMode>(),
            Err(crate::Error::ParseGameMode { .. })
        ));
    }

    #[test]
    fn session_serializes_its_state() {
        let mut session = Session::new(GameMode::SinglePlayer, Difficulty::Hard);
        session.apply_move(4).unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["mode"], "single-player");
        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["to_move"], "O");
        assert_eq!(json["game_over"], false);
    }
}
