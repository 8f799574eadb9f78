//! Post feeds
//!
//! Timeline, discover results and profile posts share one list renderer.

use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tuitter_app::{DiscoverState, SelectList};
use textwrap::{Options, WrapAlgorithm};
use tuitter_core::{Post, Timestamp};

const BORDER_SIZE: u16 = 2;
const HIGHLIGHT_SYMBOL: &str = "> ";
const PEOPLE_HEIGHT: u16 = 3;

/// Render `posts` in a bordered list titled `title`.
pub fn render(
    frame: &mut Frame,
    title: &str,
    posts: &SelectList<Post>,
    now: Timestamp,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    if posts.items().is_empty() {
        let empty = Span::styled("No posts yet", Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(empty).block(block), area);
        return;
    }

    let width = area.width.saturating_sub(BORDER_SIZE + HIGHLIGHT_SYMBOL.len() as u16);
    let items: Vec<ListItem> =
        posts.items().iter().map(|post| post_item(post, now, usize::from(width))).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default().with_selected(posts.cursor().selected());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the discover screen: matching users above matching posts.
pub fn render_discover(frame: &mut Frame, discover: &DiscoverState, now: Timestamp, area: Rect) {
    let title = if discover.query.is_empty() {
        " Discover: trending ".to_string()
    } else {
        format!(" Discover: {} ", discover.query)
    };

    if discover.users.is_empty() {
        render(frame, &title, &discover.posts, now, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PEOPLE_HEIGHT), Constraint::Min(0)])
        .split(area);

    let [people_area, posts_area] = chunks.as_ref() else {
        return;
    };

    let handles: Vec<Span> = discover
        .users
        .iter()
        .flat_map(|user| {
            [
                Span::styled(format!("@{}", user.handle), Style::default().fg(Color::Cyan)),
                Span::raw("  "),
            ]
        })
        .collect();
    let people = Paragraph::new(Line::from(handles))
        .block(Block::default().borders(Borders::ALL).title(" People "));

    frame.render_widget(people, *people_area);
    render(frame, &title, &discover.posts, now, *posts_area);
}

/// Author line, wrapped body and counters, followed by a spacer line.
fn post_item(post: &Post, now: Timestamp, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("@{}", post.author),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", post.timestamp.relative_to(now)),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    lines.extend(wrap(&post.body, width).into_iter().map(Line::from));

    let like_style =
        if post.liked_by_me { Style::default().fg(Color::Red) } else { Style::default() };
    let repost_style =
        if post.reposted_by_me { Style::default().fg(Color::Green) } else { Style::default() };
    lines.push(Line::from(vec![
        Span::styled(format!("♥ {}", post.likes), like_style),
        Span::raw("  "),
        Span::styled(format!("↻ {}", post.reposts), repost_style),
        Span::raw("  "),
        Span::raw(format!("✎ {}", post.comments)),
    ]));
    lines.push(Line::default());

    ListItem::new(lines)
}

/// Greedy word wrap measured in terminal columns, so wide glyphs such as
/// emoji count twice. Words wider than `width` are split.
pub(super) fn wrap(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(1)).wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options).into_iter().map(Cow::into_owned).collect()
}
