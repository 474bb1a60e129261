//! Board state validation and exhaustive state-space checks

use std::collections::HashSet;

use crate::board::{BoardState, Cell, Player};
use crate::lines::WINNING_LINES;

impl BoardState {
    /// Check if the board state could arise in a legal game.
    ///
    /// Verifies that piece counts differ by at most one, that the recorded
    /// turn is consistent with the counts, that at most one player has a
    /// completed line, that a winner moved last, and that a winner's lines
    /// could all have been completed by a single move.
    pub fn is_valid(&self) -> bool {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();
        let diff = x_count as isize - o_count as isize;

        if diff.abs() > 1 {
            return false;
        }

        // The recorded turn must match the counts; O-first games put O one
        // move ahead, so both directions are allowed when counts are equal.
        let turn_consistent = match self.to_move {
            Player::X => diff <= 0,
            Player::O => diff >= 0,
        };
        if !turn_consistent {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // A winner must have moved last, so it is the opponent's turn
        if x_wins && self.to_move != Player::O {
            return false;
        }
        if o_wins && self.to_move != Player::X {
            return false;
        }

        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all of a player's completed lines share at least one cell.
    ///
    /// Play stops at the first win, so several lines can only coexist when
    /// one final move completed them all, which requires a common cell.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let target = player.to_cell();
        let complete: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == target))
            .collect();

        if complete.len() < 2 {
            return true;
        }

        (0..9).any(|pos| complete.iter().all(|line| line.contains(&pos)))
    }

    /// Count the distinct states reachable from the empty board under legal
    /// play (play stops at a win). The classic total is 5,478.
    pub fn count_reachable_states() -> usize {
        let mut count = 0;
        let mut seen = HashSet::new();
        let mut stack = vec![BoardState::new()];

        while let Some(state) = stack.pop() {
            if !seen.insert(state.encode()) {
                continue;
            }

            if state.is_valid() {
                count += 1;

                if !state.is_terminal() {
                    for pos in state.empty_positions() {
                        if let Ok(next) = state.make_move(pos) {
                            stack.push(next);
                        }
                    }
                }
            }
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells_str: &str, to_move: Player) -> BoardState {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in cells_str.chars().enumerate() {
            cells[i] = Cell::from_char(c).unwrap();
        }
        BoardState::from_parts(cells, to_move)
    }

    #[test]
    fn test_reachable_states_are_valid() {
        let mut board = BoardState::new();
        assert!(board.is_valid());
        for pos in [4, 0, 8, 2, 6] {
            board = board.make_move(pos).unwrap();
            assert!(board.is_valid(), "state after move {pos} should be valid");
        }
    }

    #[test]
    fn test_unbalanced_counts_are_invalid() {
        assert!(!board_from("XX.......", Player::O).is_valid());
        assert!(!board_from("XXXX.OO..", Player::O).is_valid());
    }

    #[test]
    fn test_turn_must_match_counts() {
        // X just moved, so it cannot be X's turn again
        assert!(!board_from("X........", Player::X).is_valid());
        assert!(board_from("X........", Player::O).is_valid());
    }

    #[test]
    fn test_double_winner_is_invalid() {
        assert!(!board_from("XXXOOO...", Player::O).is_valid());
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // X has a full row but it is recorded as X to move again
        assert!(!board_from("XXXOO....", Player::X).is_valid());
        assert!(board_from("XXXOO....", Player::O).is_valid());
    }

    #[test]
    fn test_double_line_requires_shared_cell() {
        // X X X
        // X O O
        // X O O   two X lines completed by one move at the shared corner
        let double = board_from("XXXXOOXOO", Player::O);
        assert!(double.winning_lines_share_cell(Player::X));
        assert!(double.is_valid());

        // X X X
        // O O .
        // X X X   two disjoint X rows cannot come from one move
        let impossible = board_from("XXXOO.XXX", Player::O);
        assert!(!impossible.winning_lines_share_cell(Player::X));
        assert!(!impossible.is_valid());
    }
}
