//! Headless random-vs-random play through the same controller the UI uses.

use crate::config::AppConfig;
use tictactoe_engine::{Controller, GameEvent, GameRng, Stats, Timings, select_computer_move};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Plays `games` complete games and returns the tally.
///
/// Timers are zeroed so each game finishes in a single pass. The X side
/// draws from its own stream forked off the configured seed.
#[instrument(skip(config))]
pub fn run_autoplay(config: &AppConfig, games: u32) -> Stats {
    let seed = config
        .seed()
        .unwrap_or_else(|| GameRng::from_entropy().seed());
    info!(seed, games, "Starting autoplay");

    let mut ctl = Controller::new(Timings::immediate(), GameRng::new(seed));
    let mut human = GameRng::new(seed.wrapping_add(0x9E37_79B9_7F4A_7C15));
    let now = Instant::now();

    while ctl.stats().games() < games {
        let Some(index) = select_computer_move(ctl.board(), &mut human) else {
            warn!("No open square on an unfinished board");
            break;
        };
        let mut events = ctl.click(index, now);
        events.extend(ctl.tick(now));
        for event in events {
            match event {
                GameEvent::Finished(result) => debug!(%result, "Game finished"),
                GameEvent::Rejected(e) => warn!(error = %e, "Autoplay move rejected"),
                _ => {}
            }
        }
    }

    let stats = ctl.stats();
    info!(?stats, "Autoplay complete");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_requested_number_of_games() {
        let config = AppConfig::default().with_seed(Some(11));
        let stats = run_autoplay(&config, 25);
        assert_eq!(stats.games(), 25);
    }

    #[test]
    fn test_same_seed_same_tally() {
        let config = AppConfig::default().with_seed(Some(5));
        assert_eq!(run_autoplay(&config, 40), run_autoplay(&config, 40));
    }
}
