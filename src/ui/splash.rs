use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::SplashLine;
use crate::theme::Theme;

const BOX_WIDTH: u16 = 50;
const BOX_HEIGHT: u16 = 12;

/// Draw the startup splash: a centered box with the configured lines, each
/// centered at its configured row inside the box.
pub fn render_splash(lines: &[SplashLine], theme: &Theme, frame: &mut Frame) {
    let area = frame.area();
    let width = BOX_WIDTH.min(area.width);
    let height = BOX_HEIGHT.min(area.height);
    let boxed = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let style = Style::default().fg(theme.splash_fg).bg(theme.splash_bg);
    let block = Block::default().borders(Borders::ALL).style(style);
    frame.render_widget(block, boxed);

    for splash_line in lines {
        if splash_line.line == 0 || splash_line.line >= height.saturating_sub(1) {
            continue;
        }
        let text_width = splash_line.text.chars().count() as u16;
        if text_width + 2 > width {
            continue;
        }
        let line_area = Rect::new(
            boxed.x + (width - text_width) / 2,
            boxed.y + splash_line.line,
            text_width,
            1,
        );
        frame.render_widget(Paragraph::new(splash_line.text.as_str()).style(style), line_area);
    }
}
