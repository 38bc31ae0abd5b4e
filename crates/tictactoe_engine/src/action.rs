//! Moves and move validation.
//!
//! A move is checked against every precondition before the board is
//! touched. Rejection returns the reason and leaves the caller's board as
//! it was; nothing here panics on bad input.

use crate::rules::{current_turn, evaluate};
use crate::types::{Board, CELLS, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A move in tic-tac-toe: a player placing their mark at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Cell index (0-8) where the mark goes.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Why a move was rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum MoveError {
    /// Index is not a board cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

fn in_bounds(mov: &Move) -> Result<(), MoveError> {
    if mov.index >= CELLS {
        Err(MoveError::OutOfBounds(mov.index))
    } else {
        Ok(())
    }
}

fn game_not_over(board: &Board) -> Result<(), MoveError> {
    if evaluate(board).is_terminal() {
        Err(MoveError::GameOver)
    } else {
        Ok(())
    }
}

fn square_is_empty(mov: &Move, board: &Board) -> Result<(), MoveError> {
    if board.is_empty(mov.index) {
        Ok(())
    } else {
        Err(MoveError::SquareOccupied(mov.index))
    }
}

fn players_turn(mov: &Move, board: &Board) -> Result<(), MoveError> {
    if mov.player == current_turn(board) {
        Ok(())
    } else {
        Err(MoveError::WrongPlayer(mov.player))
    }
}

/// Validates every precondition for `mov` on `board`.
pub fn check_move(board: &Board, mov: &Move) -> Result<(), MoveError> {
    in_bounds(mov)?;
    game_not_over(board)?;
    square_is_empty(mov, board)?;
    players_turn(mov, board)?;
    Ok(())
}

/// Places `player` at `index`, returning the new board.
///
/// # Errors
///
/// Returns the first failed precondition: out of bounds, game over,
/// occupied square, or wrong player.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let mov = Move::new(player, index);
    check_move(board, &mov)?;

    Ok(board.with(index, Square::Occupied(player)))
}

/// X and O counts differ by at most one, with X never behind.
///
/// Holds for every board reached from empty through [`apply_move`].
pub fn is_balanced(board: &Board) -> bool {
    let x_count = board.count_of(Player::X);
    let o_count = board.count_of(Player::O);
    let valid = x_count == o_count || x_count == o_count + 1;
    if !valid {
        warn!(x_count, o_count, "Board consistency violated");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_move_places_mark() {
        let board = Board::new();
        let next = apply_move(&board, 4, Player::X).unwrap();
        assert_eq!(next.get(4), Some(Square::Occupied(Player::X)));
        assert!(board.is_empty(4));
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            apply_move(&Board::new(), 9, Player::X),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_wrong_player() {
        assert_eq!(
            apply_move(&Board::new(), 0, Player::O),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_occupied_reported_before_turn() {
        let board = apply_move(&Board::new(), 0, Player::X).unwrap();
        assert_eq!(
            apply_move(&board, 0, Player::X),
            Err(MoveError::SquareOccupied(0))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(3).to_string(),
            "Square 3 is already occupied"
        );
        assert_eq!(MoveError::WrongPlayer(Player::O).to_string(), "It's not O's turn");
    }

    #[test]
    fn test_balance() {
        let board = Board::new()
            .with(0, Square::Occupied(Player::O))
            .with(1, Square::Occupied(Player::O));
        assert!(!is_balanced(&board));
        assert!(is_balanced(&Board::new()));
    }
}
