//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new square.
    Cursor(Position),
    /// Place X at a square.
    Place(Position),
    /// Clear the board and start over.
    Restart,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::at(r, c))
        .unwrap_or(cursor)
}

/// Maps a key to an action given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place(cursor)),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Position::from_key_or_label(&c.to_string()).map(Action::Place)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_stop_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
    }

    #[test]
    fn test_arrows_move_one_square() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_place_directly() {
        assert_eq!(
            action_for(Position::Center, KeyCode::Char('1')),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(action_for(Position::Center, KeyCode::Char('0')), None);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        assert_eq!(
            action_for(Position::BottomRight, KeyCode::Enter),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(action_for(Position::Center, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(Position::Center, KeyCode::Char('r')), Some(Action::Restart));
    }
}
