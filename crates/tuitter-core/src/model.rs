//! Entity model.
//!
//! Plain records. References to other entities are keys (handles and ids);
//! nothing here owns another entity.

use serde::{Deserialize, Serialize};

use crate::{
    CommentId, ConversationId, Handle, MessageId, NotificationId, PostId, Timestamp,
    search::{self, contains_ignore_case},
};

/// How a user's picture is shown in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Avatar {
    /// Short text (usually initials or a glyph cluster).
    Text(String),
    /// Multi-line art derived from an image.
    Art(String),
}

impl Avatar {
    /// Lines to draw, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::Text(text) | Self::Art(text) => text.lines(),
        }
    }
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique handle.
    pub handle: Handle,
    /// Display name.
    pub display_name: String,
    /// Free-form biography.
    pub bio: String,
    /// Number of followers.
    pub followers: u32,
    /// Number of accounts followed.
    pub following: u32,
    /// Number of posts authored.
    pub posts_count: u32,
    /// Profile picture.
    pub avatar: Avatar,
}

impl User {
    /// Handle or display name contains the lowercased `needle`.
    pub fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(self.handle.as_str(), needle)
            || contains_ignore_case(&self.display_name, needle)
    }
}

/// A post on a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier.
    pub id: PostId,
    /// Author's handle.
    pub author: Handle,
    /// Body text.
    pub body: String,
    /// When the post was published.
    pub timestamp: Timestamp,
    /// Like count.
    pub likes: u32,
    /// Repost count.
    pub reposts: u32,
    /// Comment count.
    pub comments: u32,
    /// Hashtags in the body (lowercase, no `#`).
    pub tags: Vec<String>,
    /// The viewing user has liked this post.
    pub liked_by_me: bool,
    /// The viewing user has reposted this post.
    pub reposted_by_me: bool,
}

impl Post {
    /// Post with zero counters. Tags are derived from `body`.
    pub fn new(
        id: impl Into<PostId>,
        author: impl Into<Handle>,
        body: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        let body = body.into();
        let tags = search::hashtags(&body);
        Self {
            id: id.into(),
            author: author.into(),
            body,
            timestamp,
            likes: 0,
            reposts: 0,
            comments: 0,
            tags,
            liked_by_me: false,
            reposted_by_me: false,
        }
    }

    /// Set the like, repost and comment counters.
    #[must_use]
    pub fn with_counts(mut self, likes: u32, reposts: u32, comments: u32) -> Self {
        self.likes = likes;
        self.reposts = reposts;
        self.comments = comments;
        self
    }

    /// Mark the post as liked by the viewer.
    #[must_use]
    pub fn liked(mut self) -> Self {
        self.liked_by_me = true;
        self
    }

    /// Body, author handle or any tag contains the lowercased `needle`.
    pub fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.body, needle)
            || contains_ignore_case(self.author.as_str(), needle)
            || self.tags.iter().any(|tag| tag.contains(needle))
    }

    /// Flip the viewer's like and adjust the counter.
    pub fn toggle_like(&mut self) {
        self.liked_by_me = !self.liked_by_me;
        self.likes = if self.liked_by_me {
            self.likes.saturating_add(1)
        } else {
            self.likes.saturating_sub(1)
        };
    }

    /// Flip the viewer's repost and adjust the counter.
    pub fn toggle_repost(&mut self) {
        self.reposted_by_me = !self.reposted_by_me;
        self.reposts = if self.reposted_by_me {
            self.reposts.saturating_add(1)
        } else {
            self.reposts.saturating_sub(1)
        };
    }
}

/// A direct message inside a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier.
    pub id: MessageId,
    /// Conversation the message belongs to.
    pub conversation: ConversationId,
    /// Sender's handle.
    pub sender: Handle,
    /// Body text.
    pub body: String,
    /// When the message was sent.
    pub timestamp: Timestamp,
    /// The viewing user has seen it.
    pub read: bool,
}

/// A direct-message thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation identifier.
    pub id: ConversationId,
    /// Handles of everyone in the thread, the viewer included.
    pub participants: Vec<Handle>,
    /// Messages in the order they were sent.
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Number of messages not yet read.
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    /// Most recent message. `None` for an empty thread.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Time of the last message. `None` for an empty thread.
    pub fn last_activity(&self) -> Option<Timestamp> {
        self.last_message().map(|m| m.timestamp)
    }

    /// Participants other than `viewer`.
    pub fn others<'a>(&'a self, viewer: &'a Handle) -> impl Iterator<Item = &'a Handle> {
        self.participants.iter().filter(move |h| *h != viewer)
    }
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone liked one of the viewer's posts.
    Like,
    /// Someone reposted one of the viewer's posts.
    Repost,
    /// Someone mentioned the viewer.
    Mention,
    /// Someone followed the viewer.
    Follow,
}

impl NotificationKind {
    /// Verb phrase used when listing the notification.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Like => "liked your post",
            Self::Repost => "reposted your post",
            Self::Mention => "mentioned you",
            Self::Follow => "followed you",
        }
    }
}

/// An activity notification for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification identifier.
    pub id: NotificationId,
    /// Kind of activity.
    pub kind: NotificationKind,
    /// Handle of the user who acted.
    pub actor: Handle,
    /// Post the activity refers to. `None` for follows.
    pub target: Option<PostId>,
    /// Short excerpt of the target.
    pub preview: String,
    /// When the activity happened.
    pub timestamp: Timestamp,
    /// The viewer has seen it.
    pub read: bool,
}

/// A reply under a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: CommentId,
    /// Post being replied to.
    pub post: PostId,
    /// Author's handle.
    pub author: Handle,
    /// Body text.
    pub body: String,
    /// When the comment was written.
    pub timestamp: Timestamp,
}
