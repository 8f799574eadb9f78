//! Comment overlay
//!
//! Drawn over the main area while a post's comments are open.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tuitter_app::CommentsState;
use tuitter_core::Timestamp;

const WIDTH_PERCENT: u16 = 80;
const HEIGHT_PERCENT: u16 = 80;
const POST_HEIGHT: u16 = 5;

/// Render the overlay centered in `area`.
pub fn render(frame: &mut Frame, overlay: &CommentsState, now: Timestamp, area: Rect) {
    let area = centered(area, WIDTH_PERCENT, HEIGHT_PERCENT);
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(POST_HEIGHT), Constraint::Min(0)])
        .split(area);

    let [post_area, comments_area] = chunks.as_ref() else {
        return;
    };

    let post = &overlay.post;
    let post_text = vec![
        Line::from(vec![
            Span::styled(
                format!("@{}", post.author),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", post.timestamp.relative_to(now)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(post.body.clone()),
    ];
    let post_block = Block::default().borders(Borders::ALL).title(" Post ");
    frame.render_widget(
        Paragraph::new(post_text).block(post_block).wrap(Wrap { trim: true }),
        *post_area,
    );

    let title = format!(" Comments ({}) · c reply · esc close ", post.comments);
    let block = Block::default().borders(Borders::ALL).title(title);

    if overlay.comments.items().is_empty() {
        let empty = Span::styled("No comments yet", Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(empty).block(block), *comments_area);
        return;
    }

    let items: Vec<ListItem> = overlay
        .comments
        .items()
        .iter()
        .map(|comment| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("@{}", comment.author), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" · {}", comment.timestamp.relative_to(now)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("  {}", comment.body)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(overlay.comments.cursor().selected());
    frame.render_stateful_widget(list, *comments_area, &mut state);
}

/// `percent_x` by `percent_y` of `area`, centered.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let Some(middle) = vertical.get(1) else {
        return area;
    };

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(*middle);

    horizontal.get(1).copied().unwrap_or(area)
}
