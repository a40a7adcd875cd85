//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameAction;

/// What the host should do with a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Action(GameAction),
    Quit,
}

/// Map a key event to a command.
///
/// Auto-repeat counts as a press so held arrows keep moving the piece;
/// releases and unbound keys yield `None`.
pub fn map_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputCommand::Quit);
    }

    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::MoveDown,
        KeyCode::Up => GameAction::Rotate,
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(InputCommand::Quit),
        _ => return None,
    };
    Some(InputCommand::Action(action))
}
