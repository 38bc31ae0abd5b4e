//! Full games driven through the controller with scripted randomness.

use std::time::Duration;
use tictactoe_engine::{
    Board, Controller, GameEvent, GameResult, Move, MoveError, Player, ScriptedRng, Timings,
};
use tokio::time::Instant;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Clicks `index`, then advances past the computer delay.
fn exchange(
    ctl: &mut Controller<ScriptedRng>,
    index: usize,
    now: &mut Instant,
) -> Vec<GameEvent> {
    let mut events = ctl.click(index, *now);
    *now += ctl.timings().computer_delay;
    events.extend(ctl.tick(*now));
    events
}

#[test]
fn test_human_wins_then_board_resets() {
    let mut now = Instant::now();
    // O's picks by rank among empty squares: after X@0 -> [1..8] rank 3 = 4;
    // after X@1 -> [2,3,5,6,7,8] rank 2 = 5.
    let mut ctl = Controller::new(Timings::default(), ScriptedRng::new([3, 2]));

    exchange(&mut ctl, 0, &mut now);
    assert_eq!(ctl.last_placed(), Some(Move::new(Player::O, 4)));
    exchange(&mut ctl, 1, &mut now);
    assert_eq!(ctl.last_placed(), Some(Move::new(Player::O, 5)));

    let events = ctl.click(2, now);
    let result = ctl.result();
    assert_eq!(result.winner(), Some(Player::X));
    assert_eq!(result.line().map(|l| l.cells()), Some([0, 1, 2]));
    assert_eq!(
        events,
        vec![
            GameEvent::Placed(Move::new(Player::X, 2)),
            GameEvent::Finished(result)
        ]
    );
    assert!(!ctl.is_computer_thinking());

    // Clicks during the result display are ignored.
    assert_eq!(
        ctl.click(8, now + ms(10)),
        vec![GameEvent::Rejected(MoveError::GameOver)]
    );

    assert_eq!(ctl.tick(now + ms(1999)), vec![]);
    assert_eq!(ctl.tick(now + ms(2000)), vec![GameEvent::FadeStarted]);
    assert!(ctl.is_fading());
    assert_eq!(ctl.tick(now + ms(3000)), vec![GameEvent::Cleared]);

    assert_eq!(ctl.board(), &Board::new());
    assert_eq!(ctl.result(), GameResult::InProgress);
    assert_eq!(ctl.turn(), Player::X);
    assert_eq!(ctl.stats().x_wins, 1);
    assert_eq!(ctl.next_deadline(), None);
}

#[test]
fn test_computer_can_win() {
    let mut now = Instant::now();
    // X plays 0, 1, 5 ... O is scripted onto 6, 4, 2 for the anti-diagonal.
    // After X@0 empty = [1..8], 6 is rank 5.
    // After X@1 empty = [2,3,4,5,7,8], 4 is rank 2.
    // After X@5 empty = [2,3,7,8], 2 is rank 0.
    let mut ctl = Controller::new(Timings::default(), ScriptedRng::new([5, 2, 0]));

    exchange(&mut ctl, 0, &mut now);
    exchange(&mut ctl, 1, &mut now);
    let events = exchange(&mut ctl, 5, &mut now);

    let expected = GameResult::Win {
        player: Player::O,
        line: tictactoe_engine::LINES[7],
    };
    assert_eq!(ctl.result(), expected);
    assert!(events.contains(&GameEvent::Finished(expected)));
    assert_eq!(ctl.stats().o_wins, 1);
}

#[test]
fn test_immediate_timings_play_out_a_draw() {
    let now = Instant::now();
    // Drives X@0,O@1,X@2,O@4,X@3,O@5,X@7,O@6,X@8.
    let mut ctl = Controller::new(Timings::immediate(), ScriptedRng::new([0, 1, 0, 0]));

    // Empty [1..8], rank 0 -> O@1.
    ctl.click(0, now);
    ctl.tick(now);
    // Empty [3,4,5,6,7,8], rank 1 -> O@4.
    ctl.click(2, now);
    ctl.tick(now);
    // Empty [5,6,7,8], rank 0 -> O@5.
    ctl.click(3, now);
    ctl.tick(now);
    // Empty [6,8], rank 0 -> O@6.
    ctl.click(7, now);
    ctl.tick(now);
    let events = ctl.click(8, now);

    assert!(events.contains(&GameEvent::Finished(GameResult::Draw)));
    // Display and fade are both zero, so one tick clears the board.
    assert_eq!(
        ctl.tick(now),
        vec![GameEvent::FadeStarted, GameEvent::Cleared]
    );
    assert_eq!(ctl.stats().draws, 1);
    assert_eq!(ctl.board().occupied_count(), 0);
}
