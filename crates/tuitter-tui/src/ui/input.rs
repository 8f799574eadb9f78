//! Input line
//!
//! Displays the open prompt with cursor, or the screen's key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuitter_app::App;

use crate::InputState;

const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const LEFT_BORDER: u16 = 1;
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input line.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let Some(prompt) = input.prompt() else {
        let hints = Paragraph::new(app.screen().hints())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hints, area);
        return;
    };

    let label = prompt.label();
    let paragraph = Paragraph::new(format!("{label}{}", input.buffer()))
        .style(Style::default().fg(Color::White))
        .block(block);

    frame.render_widget(paragraph, area);

    let prompt_width = LEFT_BORDER.saturating_add(label.chars().count() as u16);
    let available_width = area.width.saturating_sub(prompt_width + RIGHT_PADDING);
    let cursor_offset = (input.cursor() as u16).min(available_width);

    let cursor_x = area.x.saturating_add(prompt_width).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = cursor_x.min(max_x);

    frame.set_cursor_position((cursor_x, cursor_y));
}
