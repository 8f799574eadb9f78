//! Direct messages
//!
//! Conversation list, or the chat pane while a conversation is open.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tuitter_app::{App, OpenConversation};
use tuitter_core::{Conversation, Handle, Timestamp};

const BORDER_SIZE: u16 = 2;
const PREVIEW_CHARS: usize = 40;

/// Render the messages screen.
pub fn render(frame: &mut Frame, app: &App, now: Timestamp, area: Rect) {
    // Before the profile loads every participant is listed.
    let viewer = app.me().map_or_else(|| Handle::new(String::new()), |me| me.handle.clone());

    match &app.messages().open {
        Some(open) => {
            let title = app
                .messages()
                .conversations
                .items()
                .iter()
                .find(|c| c.id == open.id)
                .map_or_else(|| open.id.to_string(), |c| participant_names(c, &viewer));
            render_chat(frame, &title, open, &viewer, now, area);
        },
        None => render_list(frame, app, &viewer, now, area),
    }
}

fn render_list(frame: &mut Frame, app: &App, viewer: &Handle, now: Timestamp, area: Rect) {
    let conversations = &app.messages().conversations;
    let block = Block::default().borders(Borders::ALL).title(" Messages ");

    if conversations.items().is_empty() {
        let empty = Span::styled("No conversations", Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(empty).block(block), area);
        return;
    }

    let items: Vec<ListItem> = conversations
        .items()
        .iter()
        .map(|conversation| conversation_item(conversation, viewer, now))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(conversations.cursor().selected());
    frame.render_stateful_widget(list, area, &mut state);
}

fn conversation_item(
    conversation: &Conversation,
    viewer: &Handle,
    now: Timestamp,
) -> ListItem<'static> {
    let unread = conversation.unread_count();

    let mut header = vec![Span::styled(
        participant_names(conversation, viewer),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(at) = conversation.last_activity() {
        header.push(Span::styled(
            format!(" · {}", at.relative_to(now)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if unread > 0 {
        header.push(Span::styled(format!(" ({unread} new)"), Style::default().fg(Color::Red)));
    }

    let preview = conversation.last_message().map_or_else(String::new, |m| {
        let mut text: String = m.body.chars().take(PREVIEW_CHARS).collect();
        if m.body.chars().count() > PREVIEW_CHARS {
            text.push('…');
        }
        text
    });

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(preview, Style::default().fg(Color::DarkGray))),
    ])
}

fn participant_names(conversation: &Conversation, viewer: &Handle) -> String {
    let names: Vec<String> = conversation.others(viewer).map(|h| format!("@{h}")).collect();
    names.join(", ")
}

/// Messages oldest first, scrolled so the newest stay visible.
fn render_chat(
    frame: &mut Frame,
    title: &str,
    open: &OpenConversation,
    viewer: &Handle,
    now: Timestamp,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(format!(" {title} "));

    let items: Vec<ListItem> = open
        .messages
        .items()
        .iter()
        .map(|message| {
            let sender_style = if message.sender == *viewer {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("<{}>", message.sender), sender_style),
                Span::raw(" "),
                Span::raw(message.body.clone()),
                Span::styled(
                    format!(" · {}", message.timestamp.relative_to(now)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let visible_height = usize::from(area.height.saturating_sub(BORDER_SIZE));
    let selected = open.messages.cursor().selected();
    let mut state = ListState::default().with_selected(selected);
    if let Some(selected) = selected {
        *state.offset_mut() = (selected + 1).saturating_sub(visible_height);
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, area, &mut state);
}
