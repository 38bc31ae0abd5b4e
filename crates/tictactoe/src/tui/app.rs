//! Application state and logic.

use super::input::{Action, action_for};
use crate::config::AppConfig;
use crossterm::event::KeyCode;
use std::time::Duration;
use tictactoe_engine::{
    Controller, GameEvent, GameResult, GameRng, Move, Player, Position, RandomSource, Stats,
};
use tokio::time::Instant;
use tracing::{debug, info};

/// Longest the loop sleeps without redrawing.
const IDLE_REDRAW: Duration = Duration::from_millis(250);
/// Redraw interval while a placement animation runs.
const ANIMATION_FRAME: Duration = Duration::from_millis(40);

/// A mark being drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The move being animated.
    pub mov: Move,
    /// When the mark landed.
    pub started: Instant,
}

/// Main application state.
pub struct App<R = GameRng> {
    controller: Controller<R>,
    cursor: Position,
    placement: Option<Placement>,
    placement_len: Duration,
    should_quit: bool,
}

impl App<GameRng> {
    /// Creates the app from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "Computer RNG ready");
        Self::new(Controller::new(config.timings(), rng), config.placement())
    }
}

impl<R: RandomSource> App<R> {
    /// Creates an app around an existing controller.
    pub fn new(controller: Controller<R>, placement_len: Duration) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            placement: None,
            placement_len,
            should_quit: false,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        let Some(action) = action_for(self.cursor, key) else {
            return;
        };
        debug!(?action, "Key action");
        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::Place(pos) => {
                self.cursor = pos;
                self.click(pos, now);
            }
            Action::Restart => {
                let events = self.controller.request_reset();
                self.apply(events, now);
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a click (or key placement) on `pos`.
    pub fn click(&mut self, pos: Position, now: Instant) {
        let events = self.controller.click(pos.to_index(), now);
        self.apply(events, now);
    }

    /// Fires due timers and expires finished animations.
    pub fn tick(&mut self, now: Instant) {
        let events = self.controller.tick(now);
        self.apply(events, now);
        if self
            .placement
            .is_some_and(|p| now >= p.started + self.placement_len)
        {
            self.placement = None;
        }
    }

    fn apply(&mut self, events: Vec<GameEvent>, now: Instant) {
        for event in events {
            match event {
                GameEvent::Placed(mov) => {
                    debug!(%mov, "Animating placement");
                    self.placement = Some(Placement { mov, started: now });
                }
                GameEvent::Cleared => self.placement = None,
                GameEvent::Finished(result) => info!(%result, "Game finished"),
                GameEvent::Rejected(e) => debug!(error = %e, "Input ignored"),
                GameEvent::ComputerThinking | GameEvent::FadeStarted => {}
            }
        }
    }

    /// When the loop should wake up next without input.
    pub fn next_wakeup(&self, now: Instant) -> Instant {
        let mut wake = now + IDLE_REDRAW;
        if self.placement.is_some() {
            wake = wake.min(now + ANIMATION_FRAME);
        }
        if let Some(deadline) = self.controller.next_deadline() {
            wake = wake.min(deadline);
        }
        wake
    }

    /// Animation progress for `index` in `0.0..=1.0`, or `None` when idle.
    pub fn placement_progress(&self, index: usize, now: Instant) -> Option<f32> {
        let placement = self.placement.filter(|p| p.mov.index == index)?;
        if self.placement_len.is_zero() {
            return None;
        }
        let elapsed = now.saturating_duration_since(placement.started);
        Some((elapsed.as_secs_f32() / self.placement_len.as_secs_f32()).min(1.0))
    }

    /// Status line text.
    pub fn status(&self) -> String {
        match self.controller.result() {
            GameResult::Win { player, .. } => format!("Winner: {}", player),
            GameResult::Draw => "Draw!".to_string(),
            GameResult::InProgress if self.controller.is_computer_thinking() => {
                "Now moving: Computer (O)".to_string()
            }
            GameResult::InProgress => "Now moving: You (X)".to_string(),
        }
    }

    /// Whether the "thinking" banner should show.
    pub fn is_computer_thinking(&self) -> bool {
        self.controller.is_computer_thinking()
    }

    /// The game controller.
    pub fn controller(&self) -> &Controller<R> {
        &self.controller
    }

    /// Cursor square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Running tally.
    pub fn stats(&self) -> Stats {
        self.controller.stats()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cancels timers before teardown.
    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }
}

/// Symbol for `player` partway through its placement animation.
pub fn animated_symbol(player: Player, progress: Option<f32>) -> &'static str {
    match (player, progress) {
        (_, Some(p)) if p < 0.34 => "·",
        (Player::X, Some(p)) if p < 0.67 => "x",
        (Player::O, Some(p)) if p < 0.67 => "o",
        (Player::X, _) => "X",
        (Player::O, _) => "O",
    }
}
