//! Profile screen
//!
//! Avatar, counters and bio above the user's posts.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuitter_app::ProfileState;
use tuitter_core::{Timestamp, User};

use super::feed;

const BORDER_SIZE: u16 = 2;
/// Name, handle, counters and bio.
const DETAIL_LINES: u16 = 4;

/// Render the profile screen.
pub fn render(frame: &mut Frame, profile: &ProfileState, now: Timestamp, area: Rect) {
    let Some(user) = &profile.user else {
        let handle = profile.handle.as_ref().map_or_else(String::new, |h| format!(" @{h}"));
        let loading = Span::styled(
            format!("Loading profile{handle}…"),
            Style::default().fg(Color::DarkGray),
        );
        let block = Block::default().borders(Borders::ALL).title(" Profile ");
        frame.render_widget(Paragraph::new(loading).block(block), area);
        return;
    };

    let avatar_lines = u16::try_from(user.avatar.lines().count()).unwrap_or(u16::MAX);
    let card_height = avatar_lines.saturating_add(DETAIL_LINES).saturating_add(BORDER_SIZE);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(card_height), Constraint::Min(0)])
        .split(area);

    let [card_area, posts_area] = chunks.as_ref() else {
        return;
    };

    render_card(frame, user, *card_area);
    feed::render(frame, " Posts ", &profile.posts, now, *posts_area);
}

fn render_card(frame: &mut Frame, user: &User, area: Rect) {
    let mut lines: Vec<Line> = user
        .avatar
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Cyan))))
        .collect();

    lines.push(Line::from(vec![
        Span::styled(user.display_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" @{}", user.handle), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(format!(
        "{} posts  {} followers  {} following",
        user.posts_count, user.followers, user.following
    )));
    lines.push(Line::default());
    lines.push(Line::from(user.bio.clone()));

    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
