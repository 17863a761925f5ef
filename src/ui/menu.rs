use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::state::{Menu, MenuState, Mode};
use crate::theme::Theme;

/// Horizontal padding between menu titles in the bar.
const TITLE_GAP: u16 = 2;

/// Render the always-visible menu bar. The selected title is inverted while
/// the menu overlay is open.
pub fn render_menu_bar(
    menus: &[Menu],
    mode: &Mode,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let selected = match mode {
        Mode::MenuOpen(state) => Some(state.menu),
        _ => None,
    };

    let base = Style::default().fg(theme.menu_bar_fg).bg(theme.menu_bar_bg);
    let mut spans = Vec::new();
    for (i, menu) in menus.iter().enumerate() {
        let style = if selected == Some(i) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        };
        // First character doubles as the hotkey, underlined like the
        // original menu bar.
        let mut chars = menu.title.chars();
        if let Some(first) = chars.next() {
            spans.push(Span::styled(
                first.to_string(),
                style.add_modifier(Modifier::UNDERLINED),
            ));
            spans.push(Span::styled(chars.as_str().to_string(), style));
        }
        spans.push(Span::styled(" ".repeat(TITLE_GAP as usize), base));
    }

    let bar = Paragraph::new(Line::from(spans)).style(base);
    frame.render_widget(bar, area);
}

/// Render the open dropdown under its menu title.
pub fn render_dropdown(
    menus: &[Menu],
    state: &MenuState,
    theme: &Theme,
    frame: &mut Frame,
    bar_area: Rect,
) {
    let Some(menu) = menus.get(state.menu) else {
        return;
    };

    // X offset of the open menu's title in the bar.
    let x: u16 = menus
        .iter()
        .take(state.menu)
        .map(|m| m.title.chars().count() as u16 + TITLE_GAP)
        .sum();

    let width = menu
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0) as u16
        + 4;
    let height = menu.entries.len() as u16 + 2;

    let frame_area = frame.area();
    let x = x.min(frame_area.width.saturating_sub(width));
    let area = Rect::new(
        frame_area.x + x,
        bar_area.y + bar_area.height,
        width.min(frame_area.width),
        height.min(frame_area.height.saturating_sub(bar_area.height)),
    );

    let items: Vec<ListItem> = menu
        .entries
        .iter()
        .map(|e| ListItem::new(e.label.clone()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.popup_border_fg)),
        )
        .style(Style::default().fg(theme.popup_text_fg).bg(theme.popup_bg))
        .highlight_style(
            Style::default()
                .fg(theme.popup_selection_fg)
                .bg(theme.popup_selection_bg),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(state.entry));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
