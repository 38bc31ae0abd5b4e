//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here remembers move history;
//! every answer is derived from the cells alone.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has won.
    InProgress,
    /// `player` completed `line`.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Full board, no winner.
    Draw,
}

impl GameResult {
    /// Win or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameResult::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win { player, line } => write!(f, "Player {} wins on {}", player, line),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the board: first winning line in rows, columns, diagonals
/// order, else draw on a full board, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((player, line)) = winning_line(board) {
        return GameResult::Win { player, line };
    }
    if is_full(board) {
        return GameResult::Draw;
    }
    GameResult::InProgress
}

/// Side due to move: X on an even number of occupied cells, O on odd.
pub fn current_turn(board: &Board) -> Player {
    if board.occupied_count() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
