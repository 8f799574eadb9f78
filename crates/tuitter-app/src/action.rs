//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.
//! Everything except [`AppAction::Render`] and [`AppAction::Quit`] is a data
//! request handled by the [`crate::Bridge`].

use std::num::NonZeroUsize;

use tuitter_core::{
    ConversationId, Handle, NotificationFilter, NotificationId, PostId, SettingsUpdate,
};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Load the signed-in user.
    LoadCurrentUser,

    /// Load the home timeline.
    LoadTimeline {
        /// Maximum number of posts.
        limit: NonZeroUsize,
    },

    /// Load discover results.
    LoadDiscover {
        /// Search query. Empty for the full trending set.
        query: String,
    },

    /// Load a profile and its posts.
    LoadProfile {
        /// Whose profile.
        handle: Handle,
    },

    /// Publish a post.
    CreatePost {
        /// Post text.
        body: String,
    },

    /// Flip the like on a post.
    ToggleLike {
        /// Target post.
        post: PostId,
    },

    /// Flip the repost on a post.
    ToggleRepost {
        /// Target post.
        post: PostId,
    },

    /// Load a post's comments.
    LoadComments {
        /// Target post.
        post: PostId,
    },

    /// Comment on a post.
    AddComment {
        /// Target post.
        post: PostId,
        /// Comment text.
        body: String,
    },

    /// Load the conversation list.
    LoadConversations,

    /// Load a conversation's messages and mark them read.
    OpenConversation {
        /// Target conversation.
        conversation: ConversationId,
    },

    /// Send a direct message.
    SendMessage {
        /// Target conversation.
        conversation: ConversationId,
        /// Message text.
        body: String,
    },

    /// Load notifications.
    LoadNotifications {
        /// Which notifications.
        filter: NotificationFilter,
    },

    /// Mark a notification read.
    MarkNotificationRead {
        /// Target notification.
        notification: NotificationId,
    },

    /// Load settings.
    LoadSettings,

    /// Merge a settings change.
    UpdateSettings {
        /// Fields to change.
        update: SettingsUpdate,
    },
}
