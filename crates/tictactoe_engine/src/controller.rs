//! Event-driven game loop core: session + timers + randomness.
//!
//! The presentation layer feeds input events and the current instant in,
//! and gets back a list of [`GameEvent`]s to react to. Everything runs on
//! the caller's thread; nothing here sleeps.

use crate::action::{Move, MoveError};
use crate::rng::{GameRng, RandomSource};
use crate::rules::GameResult;
use crate::scheduler::{Scheduler, TimerEvent, Timings};
use crate::session::{GameSession, Notification};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, info, instrument};

/// Messages for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed; animate this cell.
    Placed(Move),
    /// The computer's reply is scheduled.
    ComputerThinking,
    /// The game ended.
    Finished(GameResult),
    /// The finished board started fading out.
    FadeStarted,
    /// The board was cleared for a new game.
    Cleared,
    /// An input was ignored.
    Rejected(MoveError),
}

/// Running tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Stats {
    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, result: GameResult) {
        match result.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None if result == GameResult::Draw => self.draws += 1,
            None => {}
        }
    }
}

/// Drives one board through repeated games.
#[derive(Debug)]
pub struct Controller<R = GameRng> {
    session: GameSession,
    timers: Scheduler,
    rng: R,
    stats: Stats,
}

impl<R: RandomSource> Controller<R> {
    /// Creates a controller on an empty board.
    pub fn new(timings: Timings, rng: R) -> Self {
        Self {
            session: GameSession::new(),
            timers: Scheduler::new(timings),
            rng,
            stats: Stats::default(),
        }
    }

    /// Handles a human click on `index`.
    ///
    /// Clicks while the computer is thinking, on occupied squares, or
    /// after the game ended come back as [`GameEvent::Rejected`].
    #[instrument(skip(self, now))]
    pub fn click(&mut self, index: usize, now: Instant) -> Vec<GameEvent> {
        match self.session.human_click(index) {
            Ok(notes) => self.absorb(notes, now),
            Err(e) => vec![GameEvent::Rejected(e)],
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(timer) = self.timers.poll(now) {
            match timer {
                TimerEvent::ComputerMove => match self.session.computer_move(&mut self.rng) {
                    Ok(notes) => events.extend(self.absorb(notes, now)),
                    Err(e) => {
                        debug!(error = %e, "Computer move skipped");
                        events.push(GameEvent::Rejected(e));
                    }
                },
                TimerEvent::FadeStarted => events.push(GameEvent::FadeStarted),
                TimerEvent::Reset => {
                    self.session.reset();
                    events.push(GameEvent::Cleared);
                }
            }
        }
        events
    }

    /// Clears the board immediately, cancelling any pending timers.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) -> Vec<GameEvent> {
        info!("Reset requested");
        self.timers.cancel_all();
        self.session.reset();
        vec![GameEvent::Cleared]
    }

    fn absorb(&mut self, notes: Vec<Notification>, now: Instant) -> Vec<GameEvent> {
        notes
            .into_iter()
            .map(|note| match note {
                Notification::Placed(mov) => GameEvent::Placed(mov),
                Notification::ComputerToMove => {
                    self.timers.schedule_computer_move(now);
                    GameEvent::ComputerThinking
                }
                Notification::Finished(result) => {
                    self.stats.record(result);
                    self.timers.cancel_computer_move();
                    self.timers.schedule_reset(now);
                    GameEvent::Finished(result)
                }
                Notification::Cleared => GameEvent::Cleared,
            })
            .collect()
    }
}

impl<R> Controller<R> {
    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Current result.
    pub fn result(&self) -> GameResult {
        self.session.result()
    }

    /// Side due to move.
    pub fn turn(&self) -> Player {
        self.session.turn()
    }

    /// Most recent placement since the last reset.
    pub fn last_placed(&self) -> Option<Move> {
        self.session.last_placed()
    }

    /// Whether the computer's reply is pending.
    pub fn is_computer_thinking(&self) -> bool {
        self.timers.computer_move_pending()
    }

    /// Whether the finished board is fading out.
    pub fn is_fading(&self) -> bool {
        self.timers.is_fading()
    }

    /// When the next timer fires, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Configured delays.
    pub fn timings(&self) -> &Timings {
        self.timers.timings()
    }

    /// Tally of finished games.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Cancels every pending timer.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
    }
}
