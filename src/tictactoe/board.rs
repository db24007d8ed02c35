//! Board representation and the rules over a board snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LineAnalyzer, MoveOutcome};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// The nine cells of a 3x3 grid in row-major order.
///
/// A board carries no turn information; whose move it is belongs to the
/// session that owns the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from explicit cells
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from 9 cell characters (`.`, `X`, `O`).
    ///
    /// Whitespace is ignored, so the three-row rendering produced by
    /// `Display` parses back to the same board.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cell characters
    /// or any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// All cells as an array
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8), `None` when out of range
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Place a cell value. Callers guarantee `pos < 9`.
    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Check if a player has a complete winning line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Ascending indices of the empty cells
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// The first winning line completed by `player`, if any
    pub fn winning_line(&self, player: Player) -> Option<[usize; 3]> {
        LineAnalyzer::winning_line(&self.cells, player)
    }

    /// Derive the outcome of the position: X win, then O win, then full board
    pub fn outcome(&self) -> MoveOutcome {
        if self.has_won(Player::X) {
            MoveOutcome::Win(Player::X)
        } else if self.has_won(Player::O) {
            MoveOutcome::Win(Player::O)
        } else if self.is_full() {
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Check if `player` has a complete winning line on `board`
pub fn has_won(board: &Board, player: Player) -> bool {
    board.has_won(player)
}

/// Check if `board` has no empty cell
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Ascending indices of the empty cells of `board`
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board.empty_cells()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.get(i), Some(Cell::Empty));
        }
        assert_eq!(board.get(9), None);
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XO. .X. ..O").unwrap();
        assert_eq!(board.get(0), Some(Cell::X));
        assert_eq!(board.get(1), Some(Cell::O));
        assert_eq!(board.get(4), Some(Cell::X));
        assert_eq!(board.get(8), Some(Cell::O));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(matches!(
            Board::from_string("XO."),
            Err(crate::Error::InvalidBoardLength { got: 3, .. })
        ));
        assert!(matches!(
            Board::from_string("XO.?....."),
            Err(crate::Error::InvalidCellCharacter {
                character: '?',
                position: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let board = Board::from_string("XOX.O...X").unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "XOX\n.O.\n..X");
        assert_eq!(Board::from_string(&rendered).unwrap(), board);
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board = Board::from_string("X.O.X.O..").unwrap();
        assert_eq!(empty_cells(&board), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(is_full(&board));
        assert!(board.empty_cells().is_empty());
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_outcome_draw() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(board.outcome(), MoveOutcome::Draw);
    }

    #[test]
    fn test_outcome_win_on_full_board() {
        // Last move fills the board and completes a line
        let board = Board::from_string("XOXOXOOXX").unwrap();
        assert_eq!(board.outcome(), MoveOutcome::Win(Player::X));
    }

    #[test]
    fn test_outcome_continue() {
        let board = Board::from_string("X...O....").unwrap();
        assert_eq!(board.outcome(), MoveOutcome::Continue);
    }

    #[test]
    fn test_winning_line() {
        let board = Board::from_string("..O.O.O..").unwrap();
        assert_eq!(board.winning_line(Player::O), Some([2, 4, 6]));
        assert_eq!(board.winning_line(Player::X), None);
    }
}
