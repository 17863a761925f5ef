use crossterm::event::{KeyCode, KeyModifiers};

use crate::buffer::Buffer;
use crate::config::{Config, MenuCommand};
use crate::event::printable_char;
use crate::keybindings::{Action, Keybindings};
use crate::plugins::{ExtensionOutcome, ExtensionRegistry};
use crate::state::{
    FileSelectState, Menu, MenuAction, MenuState, Mode, NoticeState, PromptPurpose, PromptState,
};
use crate::storage::{Storage, StorageError};
use crate::theme::Theme;
use crate::viewport::Viewport;

/// The editor aggregate: buffer, modal state and the collaborators wired up
/// at startup.
///
/// `handle_key` is the single entry point of the input state machine: one
/// raw key event goes in, is routed by the current mode, and fully resolves
/// (buffer mutation, mode transition, or overlay step) before the caller
/// reads the next event. Persistence failures never escape - they become
/// dismissible notices.
pub struct Editor {
    buffer: Buffer,
    mode: Mode,
    filename: Option<String>,
    menus: Vec<Menu>,
    storage: Storage,
    theme: Theme,
    keybindings: Keybindings,
    registry: ExtensionRegistry,
    viewport: Viewport,
    status: Option<String>,
    should_quit: bool,
}

impl Editor {
    pub fn new(config: &Config, registry: ExtensionRegistry) -> Self {
        let mut menus: Vec<Menu> = config.menus.iter().map(Menu::from_config).collect();
        if !registry.is_empty() {
            menus.push(Menu {
                title: "Tools".to_string(),
                entries: registry.menu_entries(),
            });
        }

        Self {
            buffer: Buffer::new(),
            mode: Mode::Editing,
            filename: None,
            menus,
            storage: Storage::new(config.directories.root.clone()),
            theme: Theme::from_name(&config.theme),
            keybindings: Keybindings::new(),
            registry,
            viewport: Viewport::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Update the scroll position for a text area of `height` rows and
    /// return the first visible document row. Called by the renderer once
    /// it knows the frame geometry.
    pub fn scroll_for_render(&mut self, height: usize) -> usize {
        self.viewport
            .scroll_to_cursor(self.buffer.cursor().row, height);
        self.viewport.scroll()
    }

    /// Load a document by filename, replacing the buffer on success.
    ///
    /// Shared by the file selector and command-line preloading: on failure
    /// the existing document is left untouched and the error surfaces as a
    /// notice. A load never partially overwrites the buffer.
    pub fn open_file(&mut self, filename: &str) {
        match self.storage.load(filename) {
            Ok(lines) => {
                self.buffer.load_lines(lines);
                self.filename = Some(filename.to_string());
                self.status = Some(format!("Loaded {filename}"));
                self.mode = Mode::Editing;
            }
            Err(e) => {
                tracing::warn!(file = filename, error = %e, "load failed");
                self.notice(match e {
                    StorageError::FileNotFound { .. } => {
                        format!("File does not exist: {filename}")
                    }
                    other => other.to_string(),
                });
            }
        }
    }

    /// Route one key event through the current mode.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.status = None;
        tracing::trace!(?code, ?modifiers, mode = self.mode.label(), "key event");

        // Own the mode for the duration of the transition; every arm below
        // must leave `self.mode` set.
        let mode = std::mem::replace(&mut self.mode, Mode::Editing);
        match mode {
            Mode::Editing => self.handle_editing_key(code, modifiers),
            Mode::MenuOpen(menu) => self.handle_menu_key(menu, code),
            Mode::TextPrompt(prompt) => self.handle_prompt_key(prompt, code, modifiers),
            Mode::FileSelect(select) => self.handle_file_select_key(select, code),
            // Any key acknowledges a notice.
            Mode::Notice(_) => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.keybindings.action_for(code, modifiers) {
            Some(Action::OpenMenu) => self.mode = Mode::MenuOpen(MenuState::new()),
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Save) => self.request_save(),
            Some(Action::Open) => self.open_file_select(),
            Some(Action::Move(direction)) => self.buffer.move_cursor(direction),
            Some(Action::SplitLine) => self.buffer.split_line(),
            Some(Action::DeleteBackward) => self.buffer.delete_backward(),
            Some(Action::Insert(c)) => self.buffer.insert_char(c),
            None => {}
        }
    }

    fn handle_menu_key(&mut self, mut menu: MenuState, code: KeyCode) {
        match code {
            KeyCode::Left => {
                menu.prev_menu(&self.menus);
                self.mode = Mode::MenuOpen(menu);
            }
            KeyCode::Right => {
                menu.next_menu(&self.menus);
                self.mode = Mode::MenuOpen(menu);
            }
            KeyCode::Up => {
                menu.prev_entry();
                self.mode = Mode::MenuOpen(menu);
            }
            KeyCode::Down => {
                menu.next_entry(&self.menus);
                self.mode = Mode::MenuOpen(menu);
            }
            KeyCode::Enter => {
                if let Some(action) = menu.selected_action(&self.menus) {
                    self.run_menu_action(action);
                }
            }
            // Esc or any other key cancels back to editing.
            _ => {}
        }
    }

    fn run_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Command(MenuCommand::Save) => self.request_save(),
            MenuAction::Command(MenuCommand::SaveAs) => {
                self.mode = Mode::TextPrompt(PromptState::new(PromptPurpose::SaveAs));
            }
            MenuAction::Command(MenuCommand::Open) => self.open_file_select(),
            MenuAction::Command(MenuCommand::Quit) => self.should_quit = true,
            MenuAction::Command(MenuCommand::About) => {
                self.notice(concat!(
                    "wp ",
                    env!("CARGO_PKG_VERSION"),
                    " - a WordPerfect-style word processor"
                ));
            }
            MenuAction::Extension(id) => match self.registry.get(&id) {
                Some(extension) => {
                    let ExtensionOutcome::Notice(message) =
                        extension.run(self.buffer.lines());
                    self.notice(message);
                }
                None => {
                    tracing::warn!(id = %id, "menu referenced unknown extension");
                }
            },
        }
    }

    fn handle_prompt_key(&mut self, mut prompt: PromptState, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => {
                // Cancelled: filename stays as it was.
            }
            KeyCode::Enter => {
                let PromptState { purpose, input } = prompt;
                match purpose {
                    PromptPurpose::SaveAs => self.save_as(input.trim()),
                }
            }
            KeyCode::Backspace => {
                prompt.input.pop();
                self.mode = Mode::TextPrompt(prompt);
            }
            _ => {
                if let Some(c) = printable_char(code, modifiers) {
                    prompt.input.push(c);
                }
                self.mode = Mode::TextPrompt(prompt);
            }
        }
    }

    fn handle_file_select_key(&mut self, mut select: FileSelectState, code: KeyCode) {
        match code {
            KeyCode::Up => {
                select.select_prev();
                self.mode = Mode::FileSelect(select);
            }
            KeyCode::Down => {
                select.select_next();
                self.mode = Mode::FileSelect(select);
            }
            KeyCode::Enter => match select.selected_file() {
                Some(name) => {
                    let name = name.to_string();
                    self.open_file(&name);
                }
                None => {}
            },
            KeyCode::Esc => {
                // Cancelled: buffer untouched.
            }
            _ => {
                self.mode = Mode::FileSelect(select);
            }
        }
    }

    /// Save under the current filename, or prompt for one first.
    fn request_save(&mut self) {
        match self.filename.clone() {
            Some(name) => self.save_as(&name),
            None => self.mode = Mode::TextPrompt(PromptState::new(PromptPurpose::SaveAs)),
        }
    }

    /// Write the document under `name`. An empty name is rejected with a
    /// notice and no write is attempted.
    fn save_as(&mut self, name: &str) {
        if name.is_empty() {
            self.notice("No filename provided, nothing saved");
            return;
        }
        match self.storage.save(name, self.buffer.lines()) {
            Ok(used) => {
                self.filename = Some(used.clone());
                self.buffer.clear_modified();
                self.status = Some(format!("Saved {used}"));
                self.mode = Mode::Editing;
            }
            Err(e) => {
                tracing::warn!(file = name, error = %e, "save failed");
                self.notice(e.to_string());
            }
        }
    }

    fn open_file_select(&mut self) {
        match self.storage.list() {
            Ok(candidates) if candidates.is_empty() => {
                self.notice(format!(
                    "No documents in {}",
                    self.storage.root().display()
                ));
            }
            Ok(candidates) => {
                self.mode = Mode::FileSelect(FileSelectState::new(candidates));
            }
            Err(e) => {
                tracing::warn!(error = %e, "listing documents failed");
                self.notice(e.to_string());
            }
        }
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.mode = Mode::Notice(NoticeState::new(message));
    }
}
