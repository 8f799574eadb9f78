//! Settings screen

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tuitter_app::{SettingsField, SettingsState};

const LABEL_WIDTH: usize = 22;

/// Render the settings screen.
pub fn render(frame: &mut Frame, state: &SettingsState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Settings ");

    let Some(settings) = &state.settings else {
        let loading = Span::styled("Loading…", Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(loading).block(block), area);
        return;
    };

    let items: Vec<ListItem> = SettingsField::ALL
        .iter()
        .map(|field| {
            let value = field.value(settings);
            let value_style = match value.as_str() {
                "on" | "connected" => Style::default().fg(Color::Green),
                "off" | "not connected" => Style::default().fg(Color::DarkGray),
                _ => Style::default(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<LABEL_WIDTH$}", field.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(value, value_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(state.cursor().selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}
