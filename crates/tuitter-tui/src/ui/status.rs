//! Status bar
//!
//! Shows the transient status message, or who is signed in.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuitter_app::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let content = match (app.status_message(), app.me()) {
        (Some(message), _) => {
            let style = if message.starts_with("Error") {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            Span::styled(message.to_string(), style)
        },
        (None, Some(me)) => Span::styled(
            format!("Signed in as {} (@{})", me.display_name, me.handle),
            Style::default().fg(Color::Green),
        ),
        (None, None) => Span::styled("Loading…", Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![Span::raw(" "), content]);
    let paragraph =
        Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
