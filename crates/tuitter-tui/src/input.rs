//! Input state and key handling for the TUI.
//!
//! This module owns all text input state (prompt, buffer, cursor). Keys
//! typed while no prompt is open go to the App as normal-mode keys; prompt
//! keys are edited here and submitted to the App API on Enter.

use tuitter_app::{App, AppAction, AppEvent, KeyInput};
use tuitter_core::SettingsUpdate;

use crate::commands::{self, Command};

/// What an open prompt submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// `:` command line.
    Command,
    /// `/` discover search.
    Search,
    /// `n` new post.
    Post,
    /// `i` message to the open conversation.
    Message,
    /// `c` comment on the post in the overlay.
    Comment,
}

impl Prompt {
    /// Text drawn before the buffer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Command => ":",
            Self::Search => "/",
            Self::Post => "post> ",
            Self::Message => "message> ",
            Self::Comment => "comment> ",
        }
    }

    /// Prompt opened by `c` in normal mode, given what the App shows.
    fn for_key(c: char, app: &App) -> Option<Self> {
        match c {
            ':' => Some(Self::Command),
            '/' => Some(Self::Search),
            'n' => Some(Self::Post),
            'i' if app.has_open_conversation() => Some(Self::Message),
            'c' if app.comments().is_some() => Some(Self::Comment),
            _ => None,
        }
    }
}

/// Input state for the TUI.
///
/// # Invariants
///
/// - `cursor <= buffer.chars().count()`
/// - `buffer` is empty while `prompt` is `None`
#[derive(Debug, Default)]
pub struct InputState {
    /// Open prompt. `None` in normal mode.
    prompt: Option<Prompt>,
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position within the buffer, in characters.
    cursor: usize,
}

impl InputState {
    /// Create a new input state in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open prompt. `None` in normal mode.
    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for input-only keys,
    /// or contain data actions for submitted prompts).
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        let Some(prompt) = self.prompt else {
            if let KeyInput::Char(c) = key
                && let Some(prompt) = Prompt::for_key(c, app)
            {
                self.prompt = Some(prompt);
                return vec![AppAction::Render];
            }
            return app.handle(AppEvent::Key(key));
        };

        match key {
            KeyInput::Char(c) => {
                let at = self.byte_index();
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if self.buffer.is_empty() {
                    self.close();
                } else if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < self.char_count() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.char_count();
                vec![AppAction::Render]
            },
            KeyInput::Esc => {
                self.close();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.submit(prompt, app),
            KeyInput::Tab | KeyInput::Up | KeyInput::Down => vec![],
        }
    }

    /// Handle Enter - hand the buffer to the App API for `prompt`.
    fn submit(&mut self, prompt: Prompt, app: &mut App) -> Vec<AppAction> {
        let text = std::mem::take(&mut self.buffer);
        self.close();

        let mut actions = match prompt {
            Prompt::Command if text.trim().is_empty() => vec![],
            Prompt::Command => Self::run_command(commands::parse(&text), app),
            Prompt::Search => app.search(&text),
            Prompt::Post => app.create_post(&text),
            Prompt::Message => app.send_message(&text),
            Prompt::Comment => app.add_comment(&text),
        };

        // The prompt line itself changed.
        if !actions.contains(&AppAction::Render) {
            actions.push(AppAction::Render);
        }
        actions
    }

    fn run_command(command: Command, app: &mut App) -> Vec<AppAction> {
        tracing::debug!(?command, "running command");

        match command {
            Command::Quit => app.quit(),
            Command::Post { body } => app.create_post(&body),
            Command::Search { query } => app.search(&query),
            Command::Screen(screen) => app.switch_screen(screen),
            Command::Profile { handle } => app.open_profile(handle),
            Command::Set(update) => app.update_settings(update),
            Command::Connect(provider) => {
                app.update_settings(SettingsUpdate::connection(provider, true))
            },
            Command::Disconnect(provider) => {
                app.update_settings(SettingsUpdate::connection(provider, false))
            },
            Command::UnreadOnly => app.toggle_unread_only(),
            Command::Refresh => app.refresh(),
            Command::Unknown { input } => {
                app.set_status(format!("Unknown command: {input}"));
                vec![AppAction::Render]
            },
            Command::InvalidArgs { command, error } => {
                app.set_status(format!(":{command}: {error}"));
                vec![AppAction::Render]
            },
        }
    }

    fn close(&mut self) {
        self.prompt = None;
        self.buffer.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the cursor in `buffer`.
    fn byte_index(&self) -> usize {
        self.buffer.char_indices().nth(self.cursor).map_or(self.buffer.len(), |(i, _)| i)
    }
}
