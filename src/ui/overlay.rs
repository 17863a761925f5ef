//! Centered modal overlays: notices, the filename prompt and the file
//! selector. Layout mirrors the original's modal windows - a bordered box
//! centered on the screen, sized to its content.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::state::{FileSelectState, PromptState};
use crate::theme::Theme;

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn popup_block(theme: &Theme) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.popup_border_fg))
        .style(Style::default().fg(theme.popup_text_fg).bg(theme.popup_bg))
}

/// A dismissible message box; any key acknowledges it.
pub fn render_notice(message: &str, theme: &Theme, frame: &mut Frame) {
    let width = (message.chars().count() as u16 + 4).max(20);
    let area = centered_rect(width, 3, frame.area());

    let paragraph = Paragraph::new(Line::raw(message))
        .centered()
        .block(popup_block(theme));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Single-line text entry with the terminal cursor at the end of the input.
pub fn render_prompt(prompt: &PromptState, theme: &Theme, frame: &mut Frame) {
    let title = prompt.purpose.title();
    let width = (title.chars().count() as u16 + 4)
        .max(prompt.input.chars().count() as u16 + 4)
        .max(30);
    let area = centered_rect(width, 4, frame.area());

    let paragraph = Paragraph::new(vec![Line::raw(title), Line::raw(prompt.input.as_str())])
        .block(popup_block(theme));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
    frame.set_cursor_position((
        area.x + 1 + prompt.input.chars().count() as u16,
        area.y + 2,
    ));
}

/// Scrollable candidate list with the current selection highlighted.
pub fn render_file_select(select: &FileSelectState, theme: &Theme, frame: &mut Frame) {
    let longest = select
        .candidates
        .iter()
        .map(|f| f.chars().count())
        .max()
        .unwrap_or(0) as u16;
    let width = (longest + 4).max(40);
    let height = (select.candidates.len() as u16 + 2).min(frame.area().height);
    let area = centered_rect(width, height, frame.area());

    let items: Vec<ListItem> = select
        .candidates
        .iter()
        .map(|f| ListItem::new(f.clone()))
        .collect();
    let list = List::new(items)
        .block(popup_block(theme).title(" Open document "))
        .highlight_style(
            Style::default()
                .fg(theme.popup_selection_fg)
                .bg(theme.popup_selection_bg),
        );

    let mut list_state = ListState::default();
    if !select.candidates.is_empty() {
        list_state.select(Some(select.selected));
    }

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
