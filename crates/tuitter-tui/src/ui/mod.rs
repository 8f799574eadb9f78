//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O): they read the App and
//! input state and draw into the frame.

mod comments;
mod feed;
mod header;
mod input;
mod messages;
mod notifications;
mod profile;
mod settings;
mod sidebar;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use tuitter_app::{App, Screen};
use tuitter_core::Timestamp;

use crate::InputState;

/// Render the entire UI.
///
/// `now` is the instant post and message ages are measured against.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, now: Timestamp) {
    const HEADER_HEIGHT: u16 = 1;
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, main_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, app, *header_area);
    render_main_area(frame, app, now, *main_area);
    input::render(frame, app, input, *input_area);
    status::render(frame, app, *status_area);

    if let Some(overlay) = app.comments() {
        comments::render(frame, overlay, now, *main_area);
    }
}

/// Render the main area (sidebar + active screen).
fn render_main_area(frame: &mut Frame, app: &App, now: Timestamp, area: Rect) {
    const SIDEBAR_WIDTH: u16 = 24;
    const CONTENT_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(CONTENT_MIN_WIDTH)])
        .split(area);

    let [sidebar_area, content_area] = chunks.as_ref() else {
        return;
    };

    sidebar::render(frame, app, *sidebar_area);

    let content_area = *content_area;
    match app.screen() {
        Screen::Timeline => feed::render(frame, " Timeline ", app.timeline(), now, content_area),
        Screen::Discover => feed::render_discover(frame, app.discover(), now, content_area),
        Screen::Notifications => notifications::render(frame, app, now, content_area),
        Screen::Messages => messages::render(frame, app, now, content_area),
        Screen::Settings => settings::render(frame, app.settings(), content_area),
        Screen::Profile => profile::render(frame, app.profile(), now, content_area),
    }
}
