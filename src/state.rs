//! Modal state for the input state machine.
//!
//! The editor is always in exactly one mode. `Editing` routes keys to the
//! buffer; every other mode is a transient overlay that suspends editing
//! until it resolves. Overlay state lives here; the transition logic lives
//! in `editor.rs`.

use crate::config::{MenuCommand, MenuConfig};

/// What a resolved menu entry does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Command(MenuCommand),
    /// Run a registered extension by id.
    Extension(String),
}

#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

/// A top-level menu with its dropdown entries, resolved from config plus
/// extension contributions.
#[derive(Debug, Clone)]
pub struct Menu {
    pub title: String,
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn from_config(config: &MenuConfig) -> Self {
        Self {
            title: config.title.clone(),
            entries: config
                .entries
                .iter()
                .map(|e| MenuEntry {
                    label: e.label.clone(),
                    action: MenuAction::Command(e.command),
                })
                .collect(),
        }
    }
}

/// Selection state while the menu bar overlay is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub menu: usize,
    pub entry: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self { menu: 0, entry: 0 }
    }

    /// Left/Right cycle through the top-level menus, wrapping at the ends.
    pub fn prev_menu(&mut self, menus: &[Menu]) {
        if menus.is_empty() {
            return;
        }
        self.menu = if self.menu == 0 {
            menus.len() - 1
        } else {
            self.menu - 1
        };
        self.entry = 0;
    }

    pub fn next_menu(&mut self, menus: &[Menu]) {
        if menus.is_empty() {
            return;
        }
        self.menu = (self.menu + 1) % menus.len();
        self.entry = 0;
    }

    /// Up/Down move within the open dropdown, stopping at the ends.
    pub fn prev_entry(&mut self) {
        self.entry = self.entry.saturating_sub(1);
    }

    pub fn next_entry(&mut self, menus: &[Menu]) {
        let count = menus.get(self.menu).map_or(0, |m| m.entries.len());
        if self.entry + 1 < count {
            self.entry += 1;
        }
    }

    pub fn selected_action(&self, menus: &[Menu]) -> Option<MenuAction> {
        menus
            .get(self.menu)?
            .entries
            .get(self.entry)
            .map(|e| e.action.clone())
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a text prompt is open. Only filename entry for save-as today; the
/// variant keeps the prompt generic for future inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    SaveAs,
}

impl PromptPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            PromptPurpose::SaveAs => "Enter filename:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub purpose: PromptPurpose,
    pub input: String,
}

impl PromptState {
    pub fn new(purpose: PromptPurpose) -> Self {
        Self {
            purpose,
            input: String::new(),
        }
    }
}

/// Selection state for the file picker overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelectState {
    pub candidates: Vec<String>,
    pub selected: usize,
}

impl FileSelectState {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            selected: 0,
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.candidates.len() {
            self.selected += 1;
        }
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.candidates.get(self.selected).map(String::as_str)
    }
}

/// A dismissible message box. Any key acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub message: String,
}

impl NoticeState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The editor's current mode. Initial mode is `Editing`; there is no
/// terminal mode - quitting ends the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Editing,
    MenuOpen(MenuState),
    TextPrompt(PromptState),
    FileSelect(FileSelectState),
    Notice(NoticeState),
}

impl Mode {
    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Editing => "Ready",
            Mode::MenuOpen(_) => "Menu",
            Mode::TextPrompt(_) => "Prompt",
            Mode::FileSelect(_) => "Open",
            Mode::Notice(_) => "Notice",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing)
    }
}
