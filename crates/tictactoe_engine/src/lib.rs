//! Tic-tac-toe engine: a human (X) against a computer (O) that picks open
//! squares at random.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] ([`evaluate`],
//!   [`current_turn`], [`apply_move`]).
//! - **Opponent**: [`select_computer_move`] with an injected
//!   [`RandomSource`].
//! - **Session**: [`GameSession`], one game from empty board to reset.
//! - **Scheduler**: [`Scheduler`], deadlines for the computer's reply and the
//!   post-game reset, polled by the caller.
//! - **Controller**: [`Controller`], joins the above into the event contract
//!   a presentation layer consumes.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, GameResult, Player, apply_move, evaluate};
//!
//! let mut board = Board::new();
//! for (index, player) in [(0, Player::X), (4, Player::O), (1, Player::X), (5, Player::O), (2, Player::X)] {
//!     board = apply_move(&board, index, player).unwrap();
//! }
//! assert_eq!(evaluate(&board).winner(), Some(Player::X));
//! assert!(matches!(evaluate(&board), GameResult::Win { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod opponent;
mod position;
mod rng;
mod rules;
mod scheduler;
mod session;
mod types;

pub use action::{Move, MoveError, apply_move, check_move, is_balanced};
pub use controller::{Controller, GameEvent, Stats};
pub use opponent::select_computer_move;
pub use position::Position;
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use rules::{
    GameResult, LINES, Line, check_winner, current_turn, evaluate, is_draw, is_full, winning_line,
};
pub use scheduler::{Scheduler, TimerEvent, Timings};
pub use session::{COMPUTER, GameSession, HUMAN, Notification};
pub use types::{Board, CELLS, Player, Square};
