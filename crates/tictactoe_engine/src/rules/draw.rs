//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, CELLS};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == CELLS
}

/// A draw is a full board with no winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::check_winner(board).is_none()
}
