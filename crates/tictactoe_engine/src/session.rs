//! One human-versus-computer game, from empty board to reset.
//!
//! The session owns the board and the cached result. It knows nothing about
//! time: the caller decides when the computer moves and when to reset.

use crate::action::{Move, MoveError, apply_move};
use crate::opponent::select_computer_move;
use crate::rng::RandomSource;
use crate::rules::{GameResult, current_turn, evaluate};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The human always plays X.
pub const HUMAN: Player = Player::X;
/// The computer always plays O.
pub const COMPUTER: Player = Player::O;

/// What happened as a result of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A mark landed; drives the per-cell placement animation.
    Placed(Move),
    /// The game continues and it is the computer's turn.
    ComputerToMove,
    /// The game reached a terminal result.
    Finished(GameResult),
    /// The board was replaced with an empty one.
    Cleared,
}

/// Board plus derived state for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    result: GameResult,
    last_placed: Option<Move>,
}

impl GameSession {
    /// Creates a session on an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            result: GameResult::InProgress,
            last_placed: None,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Result as of the last accepted move.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Side due to move.
    pub fn turn(&self) -> Player {
        current_turn(&self.board)
    }

    /// The most recent placement, if any since the last reset.
    pub fn last_placed(&self) -> Option<Move> {
        self.last_placed
    }

    /// Marks on the board.
    pub fn moves_played(&self) -> usize {
        self.board.occupied_count()
    }

    /// Whether the game has reached a win or draw.
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// Whether the computer should move next.
    pub fn computer_to_move(&self) -> bool {
        !self.is_over() && self.turn() == COMPUTER
    }

    /// Places the human's mark at `index`.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range or occupied squares, a finished game, and
    /// clicks while it is the computer's turn.
    #[instrument(skip(self), fields(moves = self.moves_played()))]
    pub fn human_click(&mut self, index: usize) -> Result<Vec<Notification>, MoveError> {
        self.place(Move::new(HUMAN, index))
    }

    /// Lets the computer pick and place its mark.
    ///
    /// # Errors
    ///
    /// Rejects the call when it is not the computer's turn or the game is
    /// over.
    #[instrument(skip(self, rng), fields(moves = self.moves_played()))]
    pub fn computer_move<R>(&mut self, rng: &mut R) -> Result<Vec<Notification>, MoveError>
    where
        R: RandomSource + ?Sized,
    {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.turn() != COMPUTER {
            return Err(MoveError::WrongPlayer(COMPUTER));
        }
        let index = select_computer_move(&self.board, rng).ok_or(MoveError::GameOver)?;
        self.place(Move::new(COMPUTER, index))
    }

    /// Discards the board and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Notification {
        info!(result = %self.result, "Resetting board");
        *self = Self::new();
        Notification::Cleared
    }

    fn place(&mut self, mov: Move) -> Result<Vec<Notification>, MoveError> {
        let board = apply_move(&self.board, mov.index, mov.player).inspect_err(|e| {
            debug!(error = %e, %mov, "Move rejected");
        })?;

        self.board = board;
        self.result = evaluate(&self.board);
        self.last_placed = Some(mov);
        debug!(%mov, result = %self.result, "Move applied");

        let mut notes = vec![Notification::Placed(mov)];
        if self.result.is_terminal() {
            info!(result = %self.result, "Game over");
            notes.push(Notification::Finished(self.result));
        } else if self.turn() == COMPUTER {
            notes.push(Notification::ComputerToMove);
        }
        Ok(notes)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    #[test]
    fn test_human_click_hands_turn_to_computer() {
        let mut session = GameSession::new();
        let notes = session.human_click(4).unwrap();
        assert_eq!(
            notes,
            vec![
                Notification::Placed(Move::new(Player::X, 4)),
                Notification::ComputerToMove
            ]
        );
        assert!(session.computer_to_move());
        assert_eq!(session.last_placed(), Some(Move::new(Player::X, 4)));
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let mut session = GameSession::new();
        session.human_click(0).unwrap();
        let before = session.clone();
        assert_eq!(
            session.human_click(1),
            Err(MoveError::WrongPlayer(Player::X))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_computer_waits_for_human() {
        let mut session = GameSession::new();
        let mut rng = ScriptedRng::new([0]);
        assert_eq!(
            session.computer_move(&mut rng),
            Err(MoveError::WrongPlayer(Player::O))
        );
        assert_eq!(session.moves_played(), 0);
    }

    #[test]
    fn test_computer_move_uses_rng() {
        let mut session = GameSession::new();
        session.human_click(0).unwrap();
        // Empty squares are 1..=8; rank 3 is square 4.
        let mut rng = ScriptedRng::new([3]);
        let notes = session.computer_move(&mut rng).unwrap();
        assert_eq!(notes, vec![Notification::Placed(Move::new(Player::O, 4))]);
        assert_eq!(session.turn(), Player::X);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = GameSession::new();
        session.human_click(0).unwrap();
        assert_eq!(session.reset(), Notification::Cleared);
        assert_eq!(session, GameSession::new());
        assert_eq!(session.last_placed(), None);
    }
}
