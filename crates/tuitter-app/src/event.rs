//! Application input events.
//!
//! This module defines [`AppEvent`], the inputs that drive the [`crate::App`]
//! state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (Keyboard, Resize) and system ticks.
//! - Facade results translated by the [`crate::Bridge`].

use tuitter_core::{
    Comment, Conversation, ConversationId, Message, Notification, NotificationId, Post, User,
    UserSettings,
};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Signed-in user (re)loaded.
    CurrentUserLoaded(User),

    /// Home timeline loaded.
    TimelineLoaded(Vec<Post>),

    /// Discover results loaded.
    DiscoverLoaded {
        /// Query the results match. Empty for the full trending set.
        query: String,
        /// Matching trending posts.
        posts: Vec<Post>,
        /// Matching users.
        users: Vec<User>,
    },

    /// A profile loaded.
    ProfileLoaded {
        /// The user.
        user: User,
        /// Their posts, newest first.
        posts: Vec<Post>,
    },

    /// A post was published by the signed-in user.
    PostCreated(Post),

    /// A post changed (like, repost or comment count).
    PostUpdated(Post),

    /// Comments under a post loaded.
    CommentsLoaded {
        /// The post.
        post: Post,
        /// Its comments, oldest first.
        comments: Vec<Comment>,
    },

    /// The signed-in user commented.
    CommentAdded(Comment),

    /// Conversation list loaded.
    ConversationsLoaded(Vec<Conversation>),

    /// Messages of one conversation loaded.
    MessagesLoaded {
        /// Conversation the messages belong to.
        conversation: ConversationId,
        /// Messages in the order they were sent.
        messages: Vec<Message>,
    },

    /// The signed-in user sent a message.
    MessageSent(Message),

    /// Notifications loaded.
    NotificationsLoaded(Vec<Notification>),

    /// A notification was marked read.
    NotificationRead(NotificationId),

    /// Settings loaded or updated.
    SettingsLoaded(UserSettings),

    /// Error occurred.
    Error {
        /// Error description.
        message: String,
    },
}
