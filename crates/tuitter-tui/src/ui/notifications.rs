//! Notifications list

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tuitter_app::App;
use tuitter_core::{Notification, NotificationFilter, Timestamp};

const UNREAD_MARKER: &str = "● ";
const READ_MARKER: &str = "  ";

/// Render the notifications screen.
pub fn render(frame: &mut Frame, app: &App, now: Timestamp, area: Rect) {
    let state = app.notifications();
    let title = match state.filter {
        NotificationFilter::All => " Notifications ".to_string(),
        NotificationFilter::UnreadOnly => " Notifications (unread only) ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if state.items.items().is_empty() {
        let empty = Span::styled("Nothing new", Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(empty).block(block), area);
        return;
    }

    let items: Vec<ListItem> =
        state.items.items().iter().map(|n| notification_item(n, now)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(state.items.cursor().selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn notification_item(notification: &Notification, now: Timestamp) -> ListItem<'static> {
    let (marker, actor_style) = if notification.read {
        (READ_MARKER, Style::default().fg(Color::Cyan))
    } else {
        (UNREAD_MARKER, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("@{}", notification.actor), actor_style),
        Span::raw(format!(" {}", notification.kind.verb())),
        Span::styled(
            format!(" · {}", notification.timestamp.relative_to(now)),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if !notification.preview.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{READ_MARKER}\"{}\"", notification.preview),
            Style::default().fg(Color::DarkGray),
        )));
    }

    ListItem::new(lines)
}
