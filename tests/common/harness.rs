//! Test harness driving the editor against an in-memory terminal.
//!
//! Keys go straight into the state machine; frames render into a ratatui
//! `TestBackend` whose cell grid can be snapshotted as a string for
//! assertions.

use std::path::Path;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use wp::config::Config;
use wp::editor::Editor;
use wp::plugins::ExtensionRegistry;
use wp::ui;

pub struct EditorTestHarness {
    pub editor: Editor,
    terminal: Terminal<TestBackend>,
}

impl EditorTestHarness {
    /// Editor over the given document root, with an 80x24 screen.
    pub fn new(root: &Path) -> Self {
        Self::with_size(80, 24, root)
    }

    pub fn with_size(width: u16, height: u16, root: &Path) -> Self {
        let mut config = Config::default();
        config.directories.root = root.to_path_buf();
        let editor = Editor::new(&config, ExtensionRegistry::with_builtins());
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self { editor, terminal }
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.editor.handle_key(code, modifiers);
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send_key(code, KeyModifiers::NONE);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn render(&mut self) {
        let editor = &mut self.editor;
        self.terminal
            .draw(|frame| ui::render(editor, frame))
            .unwrap();
    }

    /// The last rendered frame as one string, rows joined by newlines.
    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                match buffer.cell((x, y)) {
                    Some(cell) => out.push_str(cell.symbol()),
                    None => out.push(' '),
                }
            }
            out.push('\n');
        }
        out
    }
}
