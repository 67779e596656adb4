//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command. `Tick` is never produced here; it comes from
/// the host clock.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Command::MoveDown),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => Some(Command::Rotate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Command::MoveDown));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('d'))), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('j'))), Some(Command::MoveDown));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Command::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w'))), Some(Command::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('X'))), Some(Command::Rotate));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
