//! The data-access facade.
//!
//! [`SocialApi`] is the only surface the UI layer depends on. Providers are
//! chosen at construction time (the app layer is generic over the trait), so
//! a network-backed provider can replace [`crate::FakeApi`] without touching
//! callers.

use std::num::NonZeroUsize;

use crate::{
    ApiError, Comment, Conversation, ConversationId, Handle, Message, Notification,
    NotificationId, Post, PostId, SettingsUpdate, User, UserSettings,
};

/// Which notifications to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationFilter {
    /// Every notification.
    #[default]
    All,
    /// Only notifications not yet read.
    UnreadOnly,
}

/// Social-network operations.
///
/// Every method is synchronous and returns owned values. Reads take `&self`;
/// mutations take `&mut self` and are visible to subsequent reads on the same
/// provider.
///
/// Only keyed lookups fail, and only with [`ApiError::NotFound`].
pub trait SocialApi {
    /// The signed-in user.
    fn current_user(&self) -> User;

    /// Look up a user by handle.
    fn user(&self, handle: &Handle) -> Result<User, ApiError>;

    /// Users whose handle or display name contains `query`, ignoring case.
    ///
    /// A blank query returns no users.
    fn search_users(&self, query: &str) -> Vec<User>;

    /// Home timeline, most recent first.
    ///
    /// # Invariants
    ///
    /// - Post: `len == min(limit, available posts)`
    /// - Post: timestamps are non-increasing
    fn timeline(&self, limit: NonZeroUsize) -> Vec<Post>;

    /// Trending posts, most recent first.
    ///
    /// An empty `query` returns the whole trending set. Otherwise only posts
    /// whose body, author handle or a tag contains `query` verbatim
    /// (ignoring case, whitespace included) are returned.
    fn discover_feed(&self, query: &str) -> Vec<Post>;

    /// Posts authored by `handle`, most recent first.
    fn posts_by(&self, handle: &Handle) -> Result<Vec<Post>, ApiError>;

    /// Look up a single post.
    fn post(&self, id: &PostId) -> Result<Post, ApiError>;

    /// Publish a post as the current user. It becomes the newest timeline
    /// entry.
    fn create_post(&mut self, body: &str) -> Post;

    /// Flip the viewer's like on a post and return the updated post.
    fn toggle_like(&mut self, id: &PostId) -> Result<Post, ApiError>;

    /// Flip the viewer's repost on a post and return the updated post.
    fn toggle_repost(&mut self, id: &PostId) -> Result<Post, ApiError>;

    /// Comments under a post, oldest first.
    fn comments(&self, post: &PostId) -> Result<Vec<Comment>, ApiError>;

    /// Reply to a post as the current user.
    fn add_comment(&mut self, post: &PostId, body: &str) -> Result<Comment, ApiError>;

    /// Direct-message threads, most recently active first.
    fn conversations(&self) -> Vec<Conversation>;

    /// Messages of one thread in the order they were sent.
    fn messages(&self, conversation: &ConversationId) -> Result<Vec<Message>, ApiError>;

    /// Send a message as the current user and return it.
    fn send_message(
        &mut self,
        conversation: &ConversationId,
        body: &str,
    ) -> Result<Message, ApiError>;

    /// Mark every message in a thread as read.
    fn mark_conversation_read(&mut self, conversation: &ConversationId) -> Result<(), ApiError>;

    /// Activity notifications, most recent first.
    fn notifications(&self, filter: NotificationFilter) -> Vec<Notification>;

    /// Mark one notification as read. Idempotent.
    fn mark_notification_read(&mut self, id: &NotificationId) -> Result<(), ApiError>;

    /// The viewer's settings.
    fn settings(&self) -> UserSettings;

    /// Merge `update` into the settings and return the result.
    ///
    /// Applying the same update twice yields the same settings.
    fn update_settings(&mut self, update: &SettingsUpdate) -> UserSettings;
}
