//! Key mapping from terminal events to game and view commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Commands the front end handles itself (not game state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    ToggleBlockStyle,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameAction::SoftDrop),

        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('k') => Some(GameAction::RotateCw),
        KeyCode::Char('z') => Some(GameAction::RotateCcw),

        KeyCode::Char('p') | KeyCode::Enter => Some(GameAction::Pause),
        KeyCode::Char('r') => Some(GameAction::Restart),
        KeyCode::Char('n') => Some(GameAction::ToggleNextPiece),

        _ => None,
    }
}

/// Map keyboard input to view commands.
pub fn handle_view_key(key: KeyEvent) -> Option<ViewCommand> {
    match key.code {
        KeyCode::Char('b') => Some(ViewCommand::ToggleBlockStyle),
        _ => None,
    }
}

/// Quit on q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Down)), Some(GameAction::SoftDrop));
        assert_eq!(handle_key_event(key(KeyCode::Char('z'))), Some(GameAction::RotateCcw));
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Some(GameAction::RotateCw));
        assert_eq!(handle_key_event(key(KeyCode::Char('?'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
