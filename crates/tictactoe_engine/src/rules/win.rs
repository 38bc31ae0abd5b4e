//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A winning combination: three cell indices in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    cells: [usize; 3],
}

impl Line {
    const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { cells: [a, b, c] }
    }

    /// The three cell indices, ascending.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// Whether `index` is part of this line.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// All winning lines. Order matters: the first uniform line wins ties.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(0, 1, 2),
    Line::new(3, 4, 5),
    Line::new(6, 7, 8),
    // Columns
    Line::new(0, 3, 6),
    Line::new(1, 4, 7),
    Line::new(2, 5, 8),
    // Diagonals
    Line::new(0, 4, 8),
    Line::new(2, 4, 6),
];

/// Finds the first line held entirely by one player.
///
/// Returns the player and line, or `None` if nobody has three in a row.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells;
        match (board.get(a), board.get(b), board.get(c)) {
            (Some(Square::Occupied(p1)), Some(Square::Occupied(p2)), Some(Square::Occupied(p3)))
                if p1 == p2 && p2 == p3 =>
            {
                Some((p1, *line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |b, &(i, p)| b.with(i, Square::Occupied(p)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(winning_line(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let (player, line) = winning_line(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.cells(), [2, 4, 6]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_row_beats_column_on_tie() {
        // X holds the top row and the left column at once.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(winning_line(&board).map(|(_, l)| l.cells()), Some([0, 1, 2]));
    }

    #[test]
    fn test_line_contains() {
        assert!(LINES[6].contains(4));
        assert!(!LINES[6].contains(2));
        assert_eq!(LINES[7].to_string(), "[2, 4, 6]");
    }
}
