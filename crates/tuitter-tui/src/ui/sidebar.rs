//! Screen sidebar
//!
//! Lists the numbered screens with unread badges.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use tuitter_app::{App, Screen};

const ACTIVE_PREFIX: &str = "> ";
const INACTIVE_PREFIX: &str = "  ";

/// Render the sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Screen::SIDEBAR
        .iter()
        .enumerate()
        .map(|(i, &screen)| {
            let (prefix, style) = if screen == app.screen() {
                (ACTIVE_PREFIX, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                (INACTIVE_PREFIX, Style::default())
            };

            let mut spans = vec![
                Span::raw(prefix),
                Span::styled(format!("{} {}", i + 1, screen.title()), style),
            ];
            let badge = unread_badge(app, screen);
            if badge > 0 {
                spans.push(Span::styled(format!(" ({badge})"), Style::default().fg(Color::Red)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Menu ");
    frame.render_widget(List::new(items).block(block), area);
}

/// Unread items on `screen`, as far as the App has loaded them.
fn unread_badge(app: &App, screen: Screen) -> usize {
    match screen {
        Screen::Notifications => app.notifications().unread_count(),
        Screen::Messages => {
            app.messages().conversations.items().iter().map(|c| c.unread_count()).sum()
        },
        Screen::Timeline | Screen::Discover | Screen::Settings | Screen::Profile => 0,
    }
}
