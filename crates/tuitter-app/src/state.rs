//! Observable application state types.
//!
//! View models for each screen: the records last loaded from the facade plus
//! a cursor into them. Rendering reads these; only [`crate::App`] writes them.

use tuitter_core::{
    Comment, Conversation, ConversationId, Handle, Message, Notification, NotificationFilter,
    OAuthProvider, Post, SettingsUpdate, User, UserSettings,
};

/// Selection within a list of `len` rows.
///
/// # Invariants
///
/// - `index < len` whenever `len > 0`
/// - `index == 0` when `len == 0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
    len: usize,
}

impl ListCursor {
    /// Cursor over `len` rows, on the first one.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Selected row. `None` if the list is empty.
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// List has no rows.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resize the list, clamping the selection.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Move down one row. Stops at the last row.
    pub fn next(&mut self) {
        if self.index.saturating_add(1) < self.len {
            self.index = self.index.saturating_add(1);
        }
    }

    /// Move up one row. Stops at the first row.
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Jump to the first row.
    pub fn first(&mut self) {
        self.index = 0;
    }

    /// Jump to the last row.
    pub fn last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }
}

/// Loaded rows with a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectList<T> {
    items: Vec<T>,
    cursor: ListCursor,
}

impl<T> Default for SelectList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), cursor: ListCursor::default() }
    }
}

impl<T> SelectList<T> {
    /// List over `items`, first row selected.
    pub fn new(items: Vec<T>) -> Self {
        let cursor = ListCursor::new(items.len());
        Self { items, cursor }
    }

    /// Rows in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Cursor over the rows.
    pub fn cursor(&self) -> ListCursor {
        self.cursor
    }

    /// Selected row. `None` if the list is empty.
    pub fn selected(&self) -> Option<&T> {
        self.cursor.selected().and_then(|i| self.items.get(i))
    }

    /// Swap in freshly loaded rows, keeping the selection where possible.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor.set_len(self.items.len());
    }

    /// Add a row at the top and select it.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.cursor.set_len(self.items.len());
        self.cursor.first();
    }

    /// Keep at most `len` rows from the top, clamping the selection.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
        self.cursor.set_len(self.items.len());
    }

    /// Add a row at the bottom and select it.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.cursor.set_len(self.items.len());
        self.cursor.last();
    }

    /// Drop rows failing `keep`.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
        self.cursor.set_len(self.items.len());
    }

    /// Apply `update` to every row.
    pub fn for_each_mut(&mut self, update: impl FnMut(&mut T)) {
        self.items.iter_mut().for_each(update);
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut ListCursor {
        &mut self.cursor
    }
}

impl SelectList<Post> {
    /// Replace the post with the same id, if listed.
    pub fn update_post(&mut self, post: &Post) {
        for slot in self.items.iter_mut().filter(|p| p.id == post.id) {
            slot.clone_from(post);
        }
    }
}

/// Discover screen: trending posts filtered by the last query.
#[derive(Debug, Clone, Default)]
pub struct DiscoverState {
    /// Query the results were loaded for. Empty for the full trending set.
    pub query: String,
    /// Matching posts.
    pub posts: SelectList<Post>,
    /// Users matching the query.
    pub users: Vec<User>,
}

/// Notifications screen.
#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    /// Loaded notifications, newest first.
    pub items: SelectList<Notification>,
    /// Which notifications are listed.
    pub filter: NotificationFilter,
}

impl NotificationsState {
    /// Number of loaded notifications not yet read.
    pub fn unread_count(&self) -> usize {
        self.items.items().iter().filter(|n| !n.read).count()
    }
}

/// A conversation opened in the chat pane.
#[derive(Debug, Clone)]
pub struct OpenConversation {
    /// Conversation shown.
    pub id: ConversationId,
    /// Its messages in the order they were sent.
    pub messages: SelectList<Message>,
}

/// Messages screen: conversation list and optional open chat.
#[derive(Debug, Clone, Default)]
pub struct MessagesState {
    /// Threads, most recently active first.
    pub conversations: SelectList<Conversation>,
    /// Thread shown in the chat pane. `None` while browsing the list.
    pub open: Option<OpenConversation>,
}

/// A settings row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    /// Profile display name.
    DisplayName,
    /// Profile biography.
    Bio,
    /// E-mail notification preference.
    EmailNotifications,
    /// Online-status visibility.
    ShowOnlineStatus,
    /// Account privacy.
    PrivateAccount,
    /// Linked sign-in account.
    Connection(OAuthProvider),
}

impl SettingsField {
    /// Rows in display order.
    pub const ALL: [Self; 9] = [
        Self::DisplayName,
        Self::Bio,
        Self::EmailNotifications,
        Self::ShowOnlineStatus,
        Self::PrivateAccount,
        Self::Connection(OAuthProvider::GitHub),
        Self::Connection(OAuthProvider::GitLab),
        Self::Connection(OAuthProvider::Google),
        Self::Connection(OAuthProvider::Discord),
    ];

    /// Row label.
    pub fn label(self) -> String {
        match self {
            Self::DisplayName => "Display name".to_string(),
            Self::Bio => "Bio".to_string(),
            Self::EmailNotifications => "Email notifications".to_string(),
            Self::ShowOnlineStatus => "Show online status".to_string(),
            Self::PrivateAccount => "Private account".to_string(),
            Self::Connection(provider) => format!("{provider} account"),
        }
    }

    /// Current value rendered for display.
    pub fn value(self, settings: &UserSettings) -> String {
        let on_off = |on: bool| if on { "on" } else { "off" }.to_string();
        match self {
            Self::DisplayName => settings.display_name.clone(),
            Self::Bio => settings.bio.clone(),
            Self::EmailNotifications => on_off(settings.email_notifications),
            Self::ShowOnlineStatus => on_off(settings.show_online_status),
            Self::PrivateAccount => on_off(settings.private_account),
            Self::Connection(provider) => {
                let state =
                    if settings.connections.get(provider) { "connected" } else { "not connected" };
                state.to_string()
            },
        }
    }

    /// Update flipping this row. `None` for free-text rows.
    pub fn toggle(self, settings: &UserSettings) -> Option<SettingsUpdate> {
        let update = match self {
            Self::DisplayName | Self::Bio => return None,
            Self::EmailNotifications => SettingsUpdate {
                email_notifications: Some(!settings.email_notifications),
                ..SettingsUpdate::default()
            },
            Self::ShowOnlineStatus => SettingsUpdate {
                show_online_status: Some(!settings.show_online_status),
                ..SettingsUpdate::default()
            },
            Self::PrivateAccount => SettingsUpdate {
                private_account: Some(!settings.private_account),
                ..SettingsUpdate::default()
            },
            Self::Connection(provider) => {
                SettingsUpdate::connection(provider, !settings.connections.get(provider))
            },
        };
        Some(update)
    }
}

/// Settings screen.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// Loaded settings. `None` until the first load.
    pub settings: Option<UserSettings>,
    pub(crate) cursor: ListCursor,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self { settings: None, cursor: ListCursor::new(SettingsField::ALL.len()) }
    }
}

impl SettingsState {
    /// Cursor over [`SettingsField::ALL`].
    pub fn cursor(&self) -> ListCursor {
        self.cursor
    }

    /// Row under the cursor.
    pub fn selected_field(&self) -> Option<SettingsField> {
        self.cursor.selected().and_then(|i| SettingsField::ALL.get(i)).copied()
    }
}

/// Profile screen.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    /// Whose profile is requested. `None` means the signed-in user.
    pub handle: Option<Handle>,
    /// Loaded profile.
    pub user: Option<User>,
    /// The user's posts, newest first.
    pub posts: SelectList<Post>,
}

/// Comment overlay over a post.
#[derive(Debug, Clone)]
pub struct CommentsState {
    /// Post being discussed.
    pub post: Post,
    /// Comments, oldest first.
    pub comments: SelectList<Comment>,
}
