//! Winning line analysis

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Indices into [`WINNING_LINES`] of the lines passing through each cell.
///
/// Every cell lies on its row and column; corners additionally lie on one
/// diagonal and the center on both. Edge cells have no diagonal.
pub const LINES_THROUGH: [&[usize]; 9] = [
    &[0, 3, 6],
    &[0, 4],
    &[0, 5, 7],
    &[1, 3],
    &[1, 4, 6, 7],
    &[1, 5],
    &[2, 3, 7],
    &[2, 4],
    &[2, 5, 6],
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check whether placing `mark` at `pos` completed a line through that
    /// cell.
    ///
    /// Only the lines containing the played cell are examined, and the scan
    /// stops at the first complete line. This runs once per generated child
    /// in a tree expansion, so it must stay cheap.
    pub fn move_completed_line(cells: &[Cell; 9], pos: usize, mark: Cell) -> bool {
        LINES_THROUGH[pos]
            .iter()
            .any(|&line| WINNING_LINES[line].iter().all(|&idx| cells[idx] == mark))
    }

    /// Check if a player has three in a row anywhere on the board.
    ///
    /// Full scan over all eight lines; used for states not built
    /// move-by-move (parsing, validation).
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in s.chars().enumerate() {
            cells[i] = Cell::from_char(c).unwrap();
        }
        cells
    }

    #[test]
    fn test_lines_through_is_consistent() {
        for (pos, lines) in LINES_THROUGH.iter().enumerate() {
            for &line in lines.iter() {
                assert!(
                    WINNING_LINES[line].contains(&pos),
                    "line {line} does not pass through cell {pos}"
                );
            }
        }
        // row + column always; diagonals only for corners and center
        assert_eq!(LINES_THROUGH[4].len(), 4);
        for corner in [0, 2, 6, 8] {
            assert_eq!(LINES_THROUGH[corner].len(), 3);
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(LINES_THROUGH[edge].len(), 2);
        }
    }

    #[test]
    fn test_move_completed_line_row() {
        let cells = cells_from("XXX......");
        assert!(LineAnalyzer::move_completed_line(&cells, 1, Cell::X));
        assert!(LineAnalyzer::move_completed_line(&cells, 2, Cell::X));
    }

    #[test]
    fn test_move_completed_line_is_local_to_the_move() {
        // O just completed the middle column at 7; the X at 8 sees no win
        let cells = cells_from("XOX.O..OX");
        assert!(LineAnalyzer::move_completed_line(&cells, 7, Cell::O));
        assert!(!LineAnalyzer::move_completed_line(&cells, 8, Cell::X));
    }

    #[test]
    fn test_edge_cell_has_no_diagonal() {
        // Main diagonal is complete, but an edge-cell move has no diagonal
        // to check; the center move on the same grid does find it
        let cells = cells_from("X.XXX...X");
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::move_completed_line(&cells, 3, Cell::X));
        assert!(LineAnalyzer::move_completed_line(&cells, 4, Cell::X));
    }

    #[test]
    fn test_has_won_all_line_kinds() {
        assert!(LineAnalyzer::has_won(&cells_from("XXX......"), Player::X));
        assert!(LineAnalyzer::has_won(&cells_from("O..O..O.."), Player::O));
        assert!(LineAnalyzer::has_won(&cells_from("X...X...X"), Player::X));
        assert!(LineAnalyzer::has_won(&cells_from("..O.O.O.."), Player::O));
        assert!(!LineAnalyzer::has_won(&cells_from("XX.O.O..."), Player::X));
    }
}
