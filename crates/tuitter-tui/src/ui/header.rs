//! Header bar
//!
//! App name, active screen and signed-in user.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuitter_app::App;

const APP_NAME: &str = " tuitter ";

/// Render the header bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let user = app.me().map_or_else(String::new, |me| format!("@{} ", me.handle));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(user.chars().count() as u16)])
        .split(area);

    let [title_area, user_area] = chunks.as_ref() else {
        return;
    };

    let title = Line::from(vec![
        Span::styled(APP_NAME, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("| "),
        Span::styled(app.screen().title(), Style::default().add_modifier(Modifier::BOLD)),
    ]);

    frame.render_widget(Paragraph::new(title), *title_area);
    let user = Paragraph::new(user).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(user.alignment(Alignment::Right), *user_area);
}
