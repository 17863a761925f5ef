//! Raw key classification.
//!
//! The buffer inserts whatever character it is handed; deciding what counts
//! as text input happens here, in one place, before anything reaches the
//! buffer.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::cursor::Direction;

/// Extract the printable character from a key event, if any.
///
/// Shift is part of ordinary typing; any other modifier makes the event a
/// chord, not text. Control characters never qualify.
pub fn printable_char(code: KeyCode, modifiers: KeyModifiers) -> Option<char> {
    if !modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return None;
    }
    match code {
        KeyCode::Char(c) if !c.is_control() => Some(c),
        _ => None,
    }
}

/// Map an arrow key to a cursor direction.
pub fn arrow_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
