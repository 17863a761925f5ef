//! The render adapter: a pure projection of editor state onto a frame.
//!
//! Everything here treats the buffer and cursor as read-only. Document
//! coordinates are translated to screen cells in exactly one place (the
//! text area math below), so chrome height never leaks into buffer logic.

pub mod menu;
pub mod overlay;
pub mod splash;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::editor::Editor;
use crate::state::Mode;
use crate::theme::Theme;
use crate::viewport::{CHROME_BOTTOM, CHROME_TOP};

/// Draw one full frame: chrome, text area, and whatever overlay the current
/// mode calls for.
pub fn render(editor: &mut Editor, frame: &mut Frame) {
    let [menu_area, text_area, status_area] = Layout::vertical([
        Constraint::Length(CHROME_TOP),
        Constraint::Min(0),
        Constraint::Length(CHROME_BOTTOM),
    ])
    .areas(frame.area());

    let scroll = editor.scroll_for_render(text_area.height as usize);
    let theme = editor.theme().clone();

    render_text(editor, &theme, frame, text_area, scroll);
    menu::render_menu_bar(editor.menus(), editor.mode(), &theme, frame, menu_area);
    render_status_bar(editor, &theme, frame, status_area);

    match editor.mode() {
        Mode::Editing => {
            // Terminal cursor only in editing mode; overlays own the focus
            // otherwise.
            let cursor = editor.buffer().cursor();
            if cursor.row >= scroll && cursor.row - scroll < text_area.height as usize {
                frame.set_cursor_position((
                    text_area.x + cursor.col as u16,
                    text_area.y + (cursor.row - scroll) as u16,
                ));
            }
        }
        Mode::MenuOpen(state) => {
            menu::render_dropdown(editor.menus(), state, &theme, frame, menu_area);
        }
        Mode::TextPrompt(prompt) => overlay::render_prompt(prompt, &theme, frame),
        Mode::FileSelect(select) => overlay::render_file_select(select, &theme, frame),
        Mode::Notice(notice) => overlay::render_notice(&notice.message, &theme, frame),
    }
}

fn render_text(editor: &Editor, theme: &Theme, frame: &mut Frame, area: Rect, scroll: usize) {
    let buffer = editor.buffer();
    let visible: Vec<Line> = buffer
        .lines()
        .iter()
        .skip(scroll)
        .take(area.height as usize)
        .map(|l| Line::raw(l.as_str()))
        .collect();

    let paragraph = Paragraph::new(visible)
        .style(Style::default().fg(theme.editor_fg).bg(theme.editor_bg));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(editor: &Editor, theme: &Theme, frame: &mut Frame, area: Rect) {
    let cursor = editor.buffer().cursor();
    let task = editor.status().unwrap_or_else(|| editor.mode().label());
    let filename = editor.filename().unwrap_or("unknown");
    let modified = if editor.buffer().is_modified() { "*" } else { "" };
    // 1-based positions in the chrome, like the original status line.
    let status = format!(
        "{task} | {filename}{modified}    Doc 1 Pg 1 Ln {} Pos {}",
        cursor.row + 1,
        cursor.col + 1
    );

    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(theme.status_bar_fg).bg(theme.status_bar_bg));
    frame.render_widget(paragraph, area);
}
