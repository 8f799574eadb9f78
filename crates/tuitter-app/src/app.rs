//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the client completely decoupled from terminal I/O and from the
//! data provider.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Tracks the active screen and a list cursor per screen.
//! - Maps normal-mode keys to navigation and data requests.
//! - Stores terminal dimensions to handle resize events.
//! - Keeps a transient status message that expires after a few ticks.

use std::num::NonZeroUsize;

use tuitter_core::{Handle, NotificationFilter, Post, PostId, SettingsUpdate, User};

use crate::{
    AppAction, AppEvent, CommentsState, DiscoverState, KeyInput, ListCursor, MessagesState,
    NotificationsState, OpenConversation, ProfileState, Screen, SelectList, SettingsField,
    SettingsState,
};

/// Ticks a status message stays visible.
const STATUS_TICKS: u32 = 20;

/// Default number of timeline posts requested.
const DEFAULT_TIMELINE_LIMIT: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(limit) => limit,
    None => NonZeroUsize::MIN,
};

/// Application settings that are not user data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum number of posts requested for the home timeline.
    pub timeline_limit: NonZeroUsize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { timeline_limit: DEFAULT_TIMELINE_LIMIT }
    }
}

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    /// Signed-in user. `None` until loaded.
    me: Option<User>,
    screen: Screen,
    timeline: SelectList<Post>,
    discover: DiscoverState,
    notifications: NotificationsState,
    messages: MessagesState,
    settings: SettingsState,
    profile: ProfileState,
    /// Comment overlay. `None` when closed.
    comments: Option<CommentsState>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
    status_ticks: u32,
}

impl App {
    /// Create a new App on the timeline screen.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            me: None,
            screen: Screen::Timeline,
            timeline: SelectList::default(),
            discover: DiscoverState::default(),
            notifications: NotificationsState::default(),
            messages: MessagesState::default(),
            settings: SettingsState::default(),
            profile: ProfileState::default(),
            comments: None,
            terminal_size: (80, 24),
            status_message: None,
            status_ticks: 0,
        }
    }

    /// Initial loads for the first frame.
    pub fn start(&self) -> Vec<AppAction> {
        vec![
            AppAction::LoadCurrentUser,
            AppAction::LoadTimeline { limit: self.config.timeline_limit },
            AppAction::Render,
        ]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => self.handle_tick(),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::CurrentUserLoaded(user) => {
                if self.profile.user.as_ref().is_some_and(|u| u.handle == user.handle) {
                    self.profile.user = Some(user.clone());
                }
                self.me = Some(user);
                vec![AppAction::Render]
            },
            AppEvent::TimelineLoaded(posts) => {
                self.timeline.replace(posts);
                vec![AppAction::Render]
            },
            AppEvent::DiscoverLoaded { query, posts, users } => {
                self.discover.query = query;
                self.discover.posts.replace(posts);
                self.discover.users = users;
                vec![AppAction::Render]
            },
            AppEvent::ProfileLoaded { user, posts } => {
                self.profile.user = Some(user);
                self.profile.posts.replace(posts);
                vec![AppAction::Render]
            },
            AppEvent::PostCreated(post) => {
                if self.is_my_profile() {
                    self.profile.posts.prepend(post.clone());
                }
                self.timeline.prepend(post);
                self.timeline.truncate(self.config.timeline_limit.get());
                self.set_status("Posted");
                vec![AppAction::Render]
            },
            AppEvent::PostUpdated(post) => {
                self.timeline.update_post(&post);
                self.discover.posts.update_post(&post);
                self.profile.posts.update_post(&post);
                if let Some(overlay) = self.comments.as_mut().filter(|c| c.post.id == post.id) {
                    overlay.post = post;
                }
                vec![AppAction::Render]
            },
            AppEvent::CommentsLoaded { post, comments } => {
                self.comments = Some(CommentsState { post, comments: SelectList::new(comments) });
                vec![AppAction::Render]
            },
            AppEvent::CommentAdded(comment) => {
                if let Some(overlay) = self.comments.as_mut().filter(|c| c.post.id == comment.post)
                {
                    overlay.comments.push(comment);
                }
                vec![AppAction::Render]
            },
            AppEvent::ConversationsLoaded(conversations) => {
                self.messages.conversations.replace(conversations);
                vec![AppAction::Render]
            },
            AppEvent::MessagesLoaded { conversation, messages } => {
                let mut messages = SelectList::new(messages);
                messages.cursor_mut().last();
                self.messages.open = Some(OpenConversation { id: conversation, messages });
                vec![AppAction::Render]
            },
            AppEvent::MessageSent(message) => {
                if let Some(open) =
                    self.messages.open.as_mut().filter(|o| o.id == message.conversation)
                {
                    open.messages.push(message);
                }
                vec![AppAction::Render]
            },
            AppEvent::NotificationsLoaded(notifications) => {
                self.notifications.items.replace(notifications);
                vec![AppAction::Render]
            },
            AppEvent::NotificationRead(id) => {
                if self.notifications.filter == NotificationFilter::UnreadOnly {
                    self.notifications.items.retain(|n| n.id != id);
                } else {
                    self.notifications.items.for_each_mut(|n| {
                        if n.id == id {
                            n.read = true;
                        }
                    });
                }
                vec![AppAction::Render]
            },
            AppEvent::SettingsLoaded(settings) => {
                self.settings.settings = Some(settings);
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.set_status(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    fn handle_tick(&mut self) -> Vec<AppAction> {
        if self.status_message.is_none() {
            return vec![];
        }

        self.status_ticks = self.status_ticks.saturating_add(1);
        if self.status_ticks >= STATUS_TICKS {
            self.status_message = None;
            return vec![AppAction::Render];
        }
        vec![]
    }

    /// Normal-mode key bindings. Text prompts are handled by the frontend
    /// before keys reach the App.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char('q') => self.quit(),
            KeyInput::Char(c @ '1'..='5') => {
                Screen::from_digit(c).map_or_else(Vec::new, |screen| self.switch_screen(screen))
            },
            KeyInput::Char('p') => self.open_profile(None),
            KeyInput::Char('j') | KeyInput::Down => self.move_cursor(ListCursor::next),
            KeyInput::Char('k') | KeyInput::Up => self.move_cursor(ListCursor::prev),
            KeyInput::Char('g') | KeyInput::Home => self.move_cursor(ListCursor::first),
            KeyInput::Char('G') | KeyInput::End => self.move_cursor(ListCursor::last),
            KeyInput::Char('l') => self.like_selected(),
            KeyInput::Char('r') => self.repost_selected(),
            KeyInput::Char('m') if self.screen == Screen::Notifications => {
                self.mark_selected_read()
            },
            KeyInput::Char('u') => self.toggle_unread_only(),
            KeyInput::Char('R') => self.refresh(),
            KeyInput::Enter => self.activate(),
            KeyInput::Esc => self.close(),
            KeyInput::Tab => {
                let next = self.next_sidebar_screen();
                self.switch_screen(next)
            },
            KeyInput::Char(_)
            | KeyInput::Backspace
            | KeyInput::Delete
            | KeyInput::Left
            | KeyInput::Right => vec![],
        }
    }

    /// Switch to `screen` and request its data.
    ///
    /// Switching to the screen already shown is a no-op and produces no
    /// actions.
    pub fn switch_screen(&mut self, screen: Screen) -> Vec<AppAction> {
        if screen == self.screen {
            return vec![];
        }

        tracing::debug!(from = %self.screen, to = %screen, "switching screen");
        self.screen = screen;
        self.comments = None;

        let mut actions = self.load_screen();
        actions.push(AppAction::Render);
        actions
    }

    /// Show a profile. `None` shows the signed-in user's.
    pub fn open_profile(&mut self, handle: Option<Handle>) -> Vec<AppAction> {
        let Some(target) = handle.or_else(|| self.me.as_ref().map(|u| u.handle.clone())) else {
            self.set_status("Profile not loaded yet");
            return vec![AppAction::Render];
        };

        if self.profile.user.as_ref().is_some_and(|u| u.handle != target) {
            self.profile.user = None;
            self.profile.posts = SelectList::default();
        }
        self.profile.handle = Some(target.clone());
        self.screen = Screen::Profile;
        self.comments = None;
        vec![AppAction::LoadProfile { handle: target }, AppAction::Render]
    }

    /// Reload the data shown on the current screen.
    pub fn refresh(&mut self) -> Vec<AppAction> {
        let mut actions = self.load_screen();
        if let Some(overlay) = &self.comments {
            actions.push(AppAction::LoadComments { post: overlay.post.id.clone() });
        }
        actions.push(AppAction::Render);
        actions
    }

    /// Publish a post as the signed-in user.
    pub fn create_post(&mut self, body: &str) -> Vec<AppAction> {
        let body = body.trim();
        if body.is_empty() {
            self.set_status("Post is empty");
            return vec![AppAction::Render];
        }
        vec![AppAction::CreatePost { body: body.to_string() }, AppAction::Render]
    }

    /// Search the discover feed and users. Switches to the discover screen.
    pub fn search(&mut self, query: &str) -> Vec<AppAction> {
        self.screen = Screen::Discover;
        self.comments = None;
        self.discover.query = query.trim().to_string();
        vec![AppAction::LoadDiscover { query: self.discover.query.clone() }, AppAction::Render]
    }

    /// Send a message to the open conversation.
    pub fn send_message(&mut self, body: &str) -> Vec<AppAction> {
        let Some(open) = &self.messages.open else {
            self.set_status("No open conversation");
            return vec![AppAction::Render];
        };
        let conversation = open.id.clone();

        let body = body.trim();
        if body.is_empty() {
            return vec![];
        }
        vec![AppAction::SendMessage { conversation, body: body.to_string() }, AppAction::Render]
    }

    /// Comment on the post in the comment overlay.
    pub fn add_comment(&mut self, body: &str) -> Vec<AppAction> {
        let Some(overlay) = &self.comments else {
            self.set_status("No post selected");
            return vec![AppAction::Render];
        };
        let post = overlay.post.id.clone();

        let body = body.trim();
        if body.is_empty() {
            return vec![];
        }
        vec![AppAction::AddComment { post, body: body.to_string() }, AppAction::Render]
    }

    /// Merge a settings change.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Vec<AppAction> {
        if update.is_empty() {
            self.set_status("Nothing to update");
            return vec![AppAction::Render];
        }
        self.set_status("Settings saved");
        vec![AppAction::UpdateSettings { update }, AppAction::Render]
    }

    /// Flip between all and unread-only notifications.
    pub fn toggle_unread_only(&mut self) -> Vec<AppAction> {
        self.notifications.filter = match self.notifications.filter {
            NotificationFilter::All => NotificationFilter::UnreadOnly,
            NotificationFilter::UnreadOnly => NotificationFilter::All,
        };

        if self.screen == Screen::Notifications {
            vec![
                AppAction::LoadNotifications { filter: self.notifications.filter },
                AppAction::Render,
            ]
        } else {
            vec![AppAction::Render]
        }
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = 0;
    }

    fn load_screen(&self) -> Vec<AppAction> {
        match self.screen {
            Screen::Timeline => vec![AppAction::LoadTimeline { limit: self.config.timeline_limit }],
            Screen::Discover => {
                vec![AppAction::LoadDiscover { query: self.discover.query.clone() }]
            },
            Screen::Notifications => {
                vec![AppAction::LoadNotifications { filter: self.notifications.filter }]
            },
            Screen::Messages => {
                let mut actions = vec![AppAction::LoadConversations];
                if let Some(open) = &self.messages.open {
                    actions.push(AppAction::OpenConversation { conversation: open.id.clone() });
                }
                actions
            },
            Screen::Settings => vec![AppAction::LoadSettings],
            Screen::Profile => {
                let me = self.me.as_ref().map(|u| u.handle.clone());
                let handle = self.profile.handle.clone().or(me);
                handle.map(|handle| AppAction::LoadProfile { handle }).into_iter().collect()
            },
        }
    }

    fn next_sidebar_screen(&self) -> Screen {
        let position = Screen::SIDEBAR.iter().position(|s| *s == self.screen);
        let next = position.map_or(0, |i| i.saturating_add(1) % Screen::SIDEBAR.len());
        Screen::SIDEBAR.get(next).copied().unwrap_or_default()
    }

    fn move_cursor(&mut self, step: fn(&mut ListCursor)) -> Vec<AppAction> {
        step(self.active_cursor());
        vec![AppAction::Render]
    }

    /// Cursor that j/k drive: the overlay first, then the current screen.
    fn active_cursor(&mut self) -> &mut ListCursor {
        match (&mut self.comments, self.screen) {
            (Some(overlay), _) => overlay.comments.cursor_mut(),
            (None, Screen::Timeline) => self.timeline.cursor_mut(),
            (None, Screen::Discover) => self.discover.posts.cursor_mut(),
            (None, Screen::Notifications) => self.notifications.items.cursor_mut(),
            (None, Screen::Messages) => match self.messages.open.as_mut() {
                Some(open) => open.messages.cursor_mut(),
                None => self.messages.conversations.cursor_mut(),
            },
            (None, Screen::Settings) => &mut self.settings.cursor,
            (None, Screen::Profile) => self.profile.posts.cursor_mut(),
        }
    }

    /// Post under the cursor, or the overlay's post while it is open.
    fn selected_post(&self) -> Option<&Post> {
        if let Some(overlay) = &self.comments {
            return Some(&overlay.post);
        }

        match self.screen {
            Screen::Timeline => self.timeline.selected(),
            Screen::Discover => self.discover.posts.selected(),
            Screen::Profile => self.profile.posts.selected(),
            Screen::Notifications | Screen::Messages | Screen::Settings => None,
        }
    }

    fn selected_post_id(&self) -> Option<PostId> {
        self.selected_post().map(|p| p.id.clone())
    }

    fn like_selected(&mut self) -> Vec<AppAction> {
        match self.selected_post_id() {
            Some(post) => vec![AppAction::ToggleLike { post }, AppAction::Render],
            None => vec![],
        }
    }

    fn repost_selected(&mut self) -> Vec<AppAction> {
        match self.selected_post_id() {
            Some(post) => vec![AppAction::ToggleRepost { post }, AppAction::Render],
            None => vec![],
        }
    }

    fn mark_selected_read(&mut self) -> Vec<AppAction> {
        match self.notifications.items.selected().filter(|n| !n.read) {
            Some(n) => vec![
                AppAction::MarkNotificationRead { notification: n.id.clone() },
                AppAction::Render,
            ],
            None => vec![],
        }
    }

    /// Enter: open whatever is under the cursor.
    fn activate(&mut self) -> Vec<AppAction> {
        if self.comments.is_some() {
            return vec![];
        }

        match self.screen {
            Screen::Timeline | Screen::Discover | Screen::Profile => {
                match self.selected_post_id() {
                    Some(post) => vec![AppAction::LoadComments { post }, AppAction::Render],
                    None => vec![],
                }
            },
            Screen::Messages => {
                if self.messages.open.is_some() {
                    return vec![];
                }
                match self.messages.conversations.selected() {
                    Some(c) => vec![
                        AppAction::OpenConversation { conversation: c.id.clone() },
                        AppAction::Render,
                    ],
                    None => vec![],
                }
            },
            Screen::Notifications => self.mark_selected_read(),
            Screen::Settings => {
                let (Some(field), Some(settings)) =
                    (self.settings.selected_field(), self.settings.settings.as_ref())
                else {
                    return vec![];
                };

                match field.toggle(settings) {
                    Some(update) => self.update_settings(update),
                    None => {
                        let name = if field == SettingsField::Bio { "bio" } else { "name" };
                        self.set_status(format!("Edit with :set {name} <value>"));
                        vec![AppAction::Render]
                    },
                }
            },
        }
    }

    /// Esc: close the overlay, then the open conversation.
    fn close(&mut self) -> Vec<AppAction> {
        if self.comments.take().is_some() {
            return vec![AppAction::Render];
        }
        if self.screen == Screen::Messages && self.messages.open.take().is_some() {
            return vec![AppAction::LoadConversations, AppAction::Render];
        }
        vec![]
    }

    fn is_my_profile(&self) -> bool {
        match (&self.profile.user, &self.me) {
            (Some(profile), Some(me)) => profile.handle == me.handle,
            _ => false,
        }
    }

    /// Options the App was created with.
    pub fn config(&self) -> AppConfig {
        self.config
    }

    /// Signed-in user. `None` until loaded.
    pub fn me(&self) -> Option<&User> {
        self.me.as_ref()
    }

    /// Screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Home timeline.
    pub fn timeline(&self) -> &SelectList<Post> {
        &self.timeline
    }

    /// Discover screen state.
    pub fn discover(&self) -> &DiscoverState {
        &self.discover
    }

    /// Notifications screen state.
    pub fn notifications(&self) -> &NotificationsState {
        &self.notifications
    }

    /// Messages screen state.
    pub fn messages(&self) -> &MessagesState {
        &self.messages
    }

    /// Settings screen state.
    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    /// Profile screen state.
    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    /// Comment overlay. `None` when closed.
    pub fn comments(&self) -> Option<&CommentsState> {
        self.comments.as_ref()
    }

    /// A conversation is open in the chat pane of the messages screen.
    pub fn has_open_conversation(&self) -> bool {
        self.screen == Screen::Messages && self.messages.open.is_some()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use tuitter_core::{
        Avatar, Comment, CommentId, ConversationId, Message, MessageId, Notification,
        NotificationId, NotificationKind, Timestamp,
    };

    use super::*;

    const NOW: Timestamp = Timestamp::from_unix_secs(1_700_000_000);

    fn me() -> User {
        User {
            handle: Handle::from("me"),
            display_name: "Me".into(),
            bio: String::new(),
            followers: 0,
            following: 0,
            posts_count: 0,
            avatar: Avatar::Text("M".into()),
        }
    }

    fn post(id: &str) -> Post {
        Post::new(id, "me", format!("post {id}"), NOW)
    }

    fn loaded_app() -> App {
        let mut app = App::new(AppConfig::default());
        let _ = app.handle(AppEvent::CurrentUserLoaded(me()));
        let _ = app.handle(AppEvent::TimelineLoaded(vec![post("1"), post("2"), post("3")]));
        app
    }

    fn key(app: &mut App, c: char) -> Vec<AppAction> {
        app.handle(AppEvent::Key(KeyInput::Char(c)))
    }

    #[test]
    fn start_loads_user_and_timeline() {
        let app = App::new(AppConfig::default());
        assert!(matches!(app.start().as_slice(), [
            AppAction::LoadCurrentUser,
            AppAction::LoadTimeline { .. },
            AppAction::Render
        ]));
    }

    #[test]
    fn switching_to_current_screen_is_noop() {
        let mut app = loaded_app();
        assert!(key(&mut app, '1').is_empty());
        assert!(app.switch_screen(Screen::Timeline).is_empty());
    }

    #[test]
    fn digit_switches_and_loads() {
        let mut app = loaded_app();
        let actions = key(&mut app, '4');

        assert_eq!(app.screen(), Screen::Messages);
        assert_eq!(actions, vec![AppAction::LoadConversations, AppAction::Render]);
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut app = loaded_app();
        for _ in 0..5 {
            let _ = key(&mut app, 'j');
        }
        assert_eq!(app.timeline().cursor().selected(), Some(2));

        let _ = key(&mut app, 'g');
        assert_eq!(app.timeline().cursor().selected(), Some(0));
    }

    #[test]
    fn like_targets_selected_post() {
        let mut app = loaded_app();
        let _ = key(&mut app, 'j');

        assert_eq!(key(&mut app, 'l'), vec![
            AppAction::ToggleLike { post: PostId::from("2") },
            AppAction::Render
        ]);
    }

    #[test]
    fn post_updated_reaches_every_feed() {
        let mut app = loaded_app();
        let _ = app.handle(AppEvent::DiscoverLoaded {
            query: String::new(),
            posts: vec![post("2")],
            users: vec![],
        });

        let liked = post("2").with_counts(1, 0, 0).liked();
        let _ = app.handle(AppEvent::PostUpdated(liked.clone()));

        assert_eq!(app.timeline().items().get(1), Some(&liked));
        assert_eq!(app.discover().posts.items(), &[liked]);
    }

    #[test]
    fn enter_opens_comments_and_esc_closes() {
        let mut app = loaded_app();
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));
        assert_eq!(actions, vec![
            AppAction::LoadComments { post: PostId::from("1") },
            AppAction::Render
        ]);

        let comment = Comment {
            id: CommentId::from("cm1"),
            post: PostId::from("1"),
            author: Handle::from("me"),
            body: "hi".into(),
            timestamp: NOW,
        };
        let _ = app.handle(AppEvent::CommentsLoaded { post: post("1"), comments: vec![comment] });
        assert!(app.comments().is_some());

        let _ = app.handle(AppEvent::Key(KeyInput::Esc));
        assert!(app.comments().is_none());
    }

    #[test]
    fn send_message_requires_open_conversation() {
        let mut app = loaded_app();
        assert_eq!(app.send_message("hi"), vec![AppAction::Render]);
        assert_eq!(app.status_message(), Some("No open conversation"));

        let _ = key(&mut app, '4');
        let _ = app.handle(AppEvent::MessagesLoaded {
            conversation: ConversationId::from("c1"),
            messages: vec![Message {
                id: MessageId::from("m1"),
                conversation: ConversationId::from("c1"),
                sender: Handle::from("alice"),
                body: "hey".into(),
                timestamp: NOW,
                read: true,
            }],
        });

        assert!(app.has_open_conversation());
        assert_eq!(app.send_message("  yo "), vec![
            AppAction::SendMessage { conversation: ConversationId::from("c1"), body: "yo".into() },
            AppAction::Render
        ]);
    }

    #[test]
    fn unread_only_drops_read_notification() {
        let mut app = loaded_app();
        let _ = key(&mut app, '3');
        let _ = key(&mut app, 'u');
        assert_eq!(app.notifications().filter, NotificationFilter::UnreadOnly);

        let _ = app.handle(AppEvent::NotificationsLoaded(vec![Notification {
            id: NotificationId::from("n1"),
            kind: NotificationKind::Follow,
            actor: Handle::from("eve"),
            target: None,
            preview: String::new(),
            timestamp: NOW,
            read: false,
        }]));
        assert_eq!(key(&mut app, 'm'), vec![
            AppAction::MarkNotificationRead { notification: NotificationId::from("n1") },
            AppAction::Render
        ]);

        let _ = app.handle(AppEvent::NotificationRead(NotificationId::from("n1")));
        assert!(app.notifications().items.items().is_empty());
    }

    #[test]
    fn status_expires_after_ticks() {
        let mut app = loaded_app();
        let _ = app.handle(AppEvent::Error { message: "boom".into() });
        assert_eq!(app.status_message(), Some("Error: boom"));

        for _ in 0..STATUS_TICKS {
            let _ = app.handle(AppEvent::Tick);
        }
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn empty_post_is_rejected() {
        let mut app = loaded_app();
        assert_eq!(app.create_post("   "), vec![AppAction::Render]);
        assert_eq!(app.status_message(), Some("Post is empty"));
    }

    #[test]
    fn profile_defaults_to_me() {
        let mut app = loaded_app();
        assert_eq!(key(&mut app, 'p'), vec![
            AppAction::LoadProfile { handle: Handle::from("me") },
            AppAction::Render
        ]);
        assert_eq!(app.screen(), Screen::Profile);
    }
}
