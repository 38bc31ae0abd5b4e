//! Deadline bookkeeping for the computer's reply and the post-game reset.
//!
//! The scheduler never sleeps and never spawns. The owner passes in the
//! current instant, asks for the next deadline, and polls for due events.
//! There is at most one pending computer move and one pending reset chain.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, trace};

/// Delays that shape the pace of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// From the human's move to the computer's reply.
    pub computer_delay: Duration,
    /// How long a finished board stays on screen before fading.
    pub result_display: Duration,
    /// Length of the fade before the board is cleared.
    pub fade: Duration,
}

impl Timings {
    /// All delays zero; every timer is due as soon as it is scheduled.
    pub fn immediate() -> Self {
        Self {
            computer_delay: Duration::ZERO,
            result_display: Duration::ZERO,
            fade: Duration::ZERO,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            computer_delay: Duration::from_millis(1300),
            result_display: Duration::from_millis(2000),
            fade: Duration::from_millis(1000),
        }
    }
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// The computer should move now.
    ComputerMove,
    /// The finished board should start fading.
    FadeStarted,
    /// The board should be cleared.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResetStage {
    Display,
    Fade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingReset {
    stage: ResetStage,
    deadline: Instant,
}

/// Pending timers for one game board.
#[derive(Debug, Clone)]
pub struct Scheduler {
    timings: Timings,
    computer_move: Option<Instant>,
    reset: Option<PendingReset>,
}

impl Scheduler {
    /// Creates a scheduler with nothing pending.
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            computer_move: None,
            reset: None,
        }
    }

    /// Configured delays.
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Arms the computer-move timer, replacing any pending one.
    #[instrument(skip(self, now))]
    pub fn schedule_computer_move(&mut self, now: Instant) -> Instant {
        let deadline = now + self.timings.computer_delay;
        if self.computer_move.replace(deadline).is_some() {
            debug!("Replaced pending computer move");
        }
        deadline
    }

    /// Starts the display-then-fade chain, replacing any pending one.
    #[instrument(skip(self, now))]
    pub fn schedule_reset(&mut self, now: Instant) -> Instant {
        let deadline = now + self.timings.result_display;
        self.reset = Some(PendingReset {
            stage: ResetStage::Display,
            deadline,
        });
        deadline
    }

    /// Drops the pending computer move, if any.
    pub fn cancel_computer_move(&mut self) {
        self.computer_move = None;
    }

    /// Drops every pending timer.
    #[instrument(skip(self))]
    pub fn cancel_all(&mut self) {
        if self.computer_move.is_some() || self.reset.is_some() {
            debug!("Cancelling pending timers");
        }
        self.computer_move = None;
        self.reset = None;
    }

    /// Whether a computer move is waiting to fire.
    pub fn computer_move_pending(&self) -> bool {
        self.computer_move.is_some()
    }

    /// Whether a reset chain is in progress.
    pub fn reset_pending(&self) -> bool {
        self.reset.is_some()
    }

    /// Whether the reset chain has reached its fade stage.
    pub fn is_fading(&self) -> bool {
        matches!(
            self.reset,
            Some(PendingReset {
                stage: ResetStage::Fade,
                ..
            })
        )
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        let reset = self.reset.map(|r| r.deadline);
        match (self.computer_move, reset) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires the earliest timer due at `now`, if any.
    ///
    /// Call repeatedly until it returns `None` to drain everything due.
    /// The fade stage is timed from the display deadline, not from `now`,
    /// so a late poll does not stretch the chain.
    pub fn poll(&mut self, now: Instant) -> Option<TimerEvent> {
        let computer_due = self.computer_move.filter(|d| *d <= now);
        let reset_due = self.reset.filter(|r| r.deadline <= now);

        let event = match (computer_due, reset_due) {
            (Some(c), Some(r)) if c <= r.deadline => self.fire_computer_move(),
            (Some(_), None) => self.fire_computer_move(),
            (_, Some(r)) => self.advance_reset(r),
            (None, None) => return None,
        };
        trace!(?event, "Timer fired");
        Some(event)
    }

    fn fire_computer_move(&mut self) -> TimerEvent {
        self.computer_move = None;
        TimerEvent::ComputerMove
    }

    fn advance_reset(&mut self, pending: PendingReset) -> TimerEvent {
        match pending.stage {
            ResetStage::Display => {
                self.reset = Some(PendingReset {
                    stage: ResetStage::Fade,
                    deadline: pending.deadline + self.timings.fade,
                });
                TimerEvent::FadeStarted
            }
            ResetStage::Fade => {
                self.reset = None;
                TimerEvent::Reset
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}
