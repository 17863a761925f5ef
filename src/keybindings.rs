use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::cursor::Direction;
use crate::event::{arrow_direction, printable_char};

/// Everything a key press can mean while in the Editing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenMenu,
    Quit,
    Save,
    Open,
    Move(Direction),
    SplitLine,
    DeleteBackward,
    Insert(char),
}

/// Resolves raw key events to Editing-state actions.
///
/// Function keys follow the original bindings (F1 save, F2 open, F3 quit,
/// Esc menu) with Ctrl aliases for terminals that swallow the F-row.
#[derive(Debug, Clone)]
pub struct Keybindings {
    chords: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl Keybindings {
    pub fn new() -> Self {
        let mut chords = HashMap::new();
        chords.insert((KeyCode::F(1), KeyModifiers::NONE), Action::Save);
        chords.insert((KeyCode::F(2), KeyModifiers::NONE), Action::Open);
        chords.insert((KeyCode::F(3), KeyModifiers::NONE), Action::Quit);
        chords.insert((KeyCode::Esc, KeyModifiers::NONE), Action::OpenMenu);
        chords.insert((KeyCode::Char('s'), KeyModifiers::CONTROL), Action::Save);
        chords.insert((KeyCode::Char('o'), KeyModifiers::CONTROL), Action::Open);
        chords.insert((KeyCode::Char('q'), KeyModifiers::CONTROL), Action::Quit);
        Self { chords }
    }

    /// Resolve a key event. Unbound chords and unprintable keys resolve to
    /// `None` and are dropped by the state machine.
    pub fn action_for(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if let Some(action) = self.chords.get(&(code, modifiers)) {
            return Some(action.clone());
        }
        if modifiers.is_empty() {
            if let Some(direction) = arrow_direction(code) {
                return Some(Action::Move(direction));
            }
            match code {
                KeyCode::Enter => return Some(Action::SplitLine),
                KeyCode::Backspace => return Some(Action::DeleteBackward),
                _ => {}
            }
        }
        printable_char(code, modifiers).map(Action::Insert)
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::new()
    }
}
