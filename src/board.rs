//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lines::LineAnalyzer;

/// A cell on the board
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
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
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

    /// Convert player to the mark they place
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

/// Complete board state: the 3x3 grid plus per-state bookkeeping.
///
/// `to_move` records the player who moves *next* in this state. The opposite
/// reading ("who produced this state's last move") is available through
/// [`BoardState::last_mover`]; keeping both named avoids the ambiguity of a
/// single toggled flag.
///
/// The type is `Copy` since it is only 12 bytes. `move_count` always equals
/// the number of occupied cells; `has_winner` is true iff a completed line is
/// on the board, at which point the state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
    move_count: u8,
    has_winner: bool,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    ///
    /// Standard play has X moving first; O-first boards are supported for
    /// analysis from the second player's perspective.
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
            move_count: 0,
            has_winner: false,
        }
    }

    /// Build a state from raw cells and a turn, recomputing the bookkeeping
    /// by a full-board scan.
    ///
    /// This is the entry point for states not built move-by-move (parsing,
    /// hand-constructed fixtures). No validity check is performed; use
    /// [`BoardState::is_valid`] for that.
    pub fn from_parts(cells: [Cell; 9], to_move: Player) -> Self {
        let move_count = cells.iter().filter(|&&c| c != Cell::Empty).count() as u8;
        let has_winner = LineAnalyzer::has_won(&cells, Player::X)
            || LineAnalyzer::has_won(&cells, Player::O);
        BoardState {
            cells,
            to_move,
            move_count,
            has_winner,
        }
    }

    /// Replace the grid while keeping the bookkeeping. The caller guarantees
    /// the new cells are a permutation of the old ones.
    pub(crate) fn with_cells(&self, cells: [Cell; 9]) -> Self {
        BoardState { cells, ..*self }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters (whitespace is filtered out)
    /// and may carry a `_X`/`_O` suffix to set the player to move explicitly.
    /// Without a suffix the turn is inferred from the piece counts, with
    /// X-first semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if the board part is too short, a character is not a
    /// valid cell, the piece counts differ by more than one, or a suffix
    /// conflicts with the counts.
    pub fn from_string(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, suffix) = match cleaned.find('_') {
            Some(idx) => (&cleaned[..idx], Some(&cleaned[idx + 1..])),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();

        let to_move = match suffix {
            Some("X") => Player::X,
            Some("O") => Player::O,
            Some(other) => {
                return Err(Error::InvalidPlayerString {
                    player: other.to_string(),
                    label: s.to_string(),
                });
            }
            None => {
                if x_count == o_count {
                    Player::X
                } else if x_count == o_count + 1 {
                    Player::O
                } else {
                    return Err(Error::InvalidPieceCounts { x_count, o_count });
                }
            }
        };

        // An explicit suffix may describe an O-first game, but it still has
        // to be consistent with the piece counts.
        let consistent = match to_move {
            Player::X => x_count == o_count || o_count == x_count + 1,
            Player::O => x_count == o_count || x_count == o_count + 1,
        };
        if !consistent {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={x_count}, O={o_count}) are inconsistent with {to_move} to move in '{s}'"
                ),
            });
        }

        Ok(Self::from_parts(cells, to_move))
    }

    /// Number of occupied cells
    pub fn move_count(&self) -> usize {
        self.move_count as usize
    }

    /// True iff a completed line is on the board
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// The player who produced this state's last move, if any.
    ///
    /// This is the inverse reading of `to_move`: on a board built by
    /// alternating play the last mover is always the opponent of the player
    /// to move.
    pub fn last_mover(&self) -> Option<Player> {
        if self.move_count == 0 {
            None
        } else {
            Some(self.to_move.opponent())
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Apply the active player's mark at `pos` and return the new state.
    ///
    /// Places the mark, increments the move count, flips the turn, and runs
    /// the single-move win check for the played cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for positions past the grid,
    /// [`Error::GameOver`] when the state is terminal, and
    /// [`Error::OccupiedCell`] when the target cell already holds a mark.
    /// A mark is never silently overwritten.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState> {
        if pos >= 9 {
            return Err(Error::OutOfBounds { position: pos });
        }
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(Error::OccupiedCell { position: pos });
        }

        let mark = self.to_move.to_cell();
        let mut next = *self;
        next.cells[pos] = mark;
        next.move_count += 1;
        next.to_move = self.to_move.opponent();
        next.has_winner = LineAnalyzer::move_completed_line(&next.cells, pos, mark);
        Ok(next)
    }

    /// Check if a player has a completed line on the board
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.has_winner || self.move_count == 9
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.move_count == 9 && !self.has_winner
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if !self.has_winner {
            return None;
        }
        if LineAnalyzer::has_won(&self.cells, Player::X) {
            Some(Player::X)
        } else {
            Some(Player::O)
        }
    }

    /// Find the position where two board states differ (for inferring moves)
    ///
    /// Returns the first position where the cells differ, or None if the
    /// grids are identical.
    pub fn find_changed_position(&self, other: &BoardState) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }

    /// Get a string representation for use as a key, e.g. `"XO......._X"`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            let base = row * 3;
            write!(
                f,
                "{} {} {}",
                self.cells[base].to_char(),
                self.cells[base + 1].to_char(),
                self.cells[base + 2].to_char()
            )?;
        }
        Ok(())
    }
}
