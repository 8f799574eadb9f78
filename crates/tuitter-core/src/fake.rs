//! Mock provider backed by in-memory tables.
//!
//! # Tables
//!
//! - users by handle, posts by id (one record shared by timeline and
//!   trending), conversations by id, comments by post id
//! - timeline and trending are ordered lists of post ids into the post table
//!
//! Mutations rewrite records in place and are visible to every later read.
//! Nothing is persisted past the process.

use std::{collections::HashMap, num::NonZeroUsize};

use crate::{
    ApiError, Avatar, Clock, Comment, CommentId, Conversation, ConversationId, Entity, Handle,
    Message, MessageId, Notification, NotificationFilter, NotificationId, Post, PostId,
    SampleData, SettingsUpdate, SocialApi, SystemClock, User, UserSettings, search,
};

/// First sequence number handed to records created at runtime.
const FIRST_GENERATED_ID: u64 = 1000;

/// [`SocialApi`] provider serving static sample data.
///
/// Generic over [`Clock`] so tests can freeze time. Created records get ids
/// from a per-provider counter (`p1000`, `m1001`, ...), so runs are
/// reproducible.
#[derive(Debug, Clone)]
pub struct FakeApi<C: Clock = SystemClock> {
    clock: C,
    me: Handle,
    users: HashMap<Handle, User>,
    posts: HashMap<PostId, Post>,
    timeline: Vec<PostId>,
    trending: Vec<PostId>,
    conversations: HashMap<ConversationId, Conversation>,
    notifications: Vec<Notification>,
    comments: HashMap<PostId, Vec<Comment>>,
    settings: UserSettings,
    next_id: u64,
}

impl FakeApi<SystemClock> {
    /// Provider over the built-in demo content, timestamped from the system
    /// clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FakeApi<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FakeApi<C> {
    /// Provider over the built-in demo content, anchored at `clock.now()`.
    pub fn with_clock(clock: C) -> Self {
        let data = SampleData::builtin(clock.now());
        Self::from_data(data, clock)
    }

    /// Provider over caller-supplied tables.
    pub fn from_data(data: SampleData, clock: C) -> Self {
        let dangling = data.dangling_references();
        if !dangling.is_empty() {
            tracing::warn!(?dangling, "sample data has unresolved references");
        }

        let SampleData {
            me,
            users,
            timeline,
            trending,
            conversations,
            notifications,
            comments,
            settings,
        } = data;

        let me_handle = me.handle.clone();
        let users: HashMap<Handle, User> = std::iter::once(me)
            .chain(users)
            .map(|user| (user.handle.clone(), user))
            .collect();

        let mut posts = HashMap::new();
        let timeline = index_posts(&mut posts, timeline);
        let trending = index_posts(&mut posts, trending);

        let conversations = conversations.into_iter().map(|c| (c.id.clone(), c)).collect();

        let mut comments_by_post: HashMap<PostId, Vec<Comment>> = HashMap::new();
        for comment in comments {
            comments_by_post.entry(comment.post.clone()).or_default().push(comment);
        }

        Self {
            clock,
            me: me_handle,
            users,
            posts,
            timeline,
            trending,
            conversations,
            notifications,
            comments: comments_by_post,
            settings,
            next_id: FIRST_GENERATED_ID,
        }
    }

    /// Number of posts across all feeds.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    fn generate_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn posts_newest_first<'a>(&self, ids: impl IntoIterator<Item = &'a PostId>) -> Vec<Post> {
        let mut posts: Vec<Post> =
            ids.into_iter().filter_map(|id| self.posts.get(id)).cloned().collect();
        // Stable: equal timestamps keep feed order.
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts
    }

    fn post_mut(&mut self, id: &PostId) -> Result<&mut Post, ApiError> {
        self.posts.get_mut(id).ok_or_else(|| ApiError::not_found(Entity::Post, id))
    }

    fn conversation_mut(&mut self, id: &ConversationId) -> Result<&mut Conversation, ApiError> {
        self.conversations.get_mut(id).ok_or_else(|| ApiError::not_found(Entity::Conversation, id))
    }

    fn me_mut(&mut self) -> Option<&mut User> {
        self.users.get_mut(&self.me)
    }
}

impl<C: Clock> SocialApi for FakeApi<C> {
    fn current_user(&self) -> User {
        // `from_data` always inserts the signed-in user.
        self.users.get(&self.me).cloned().unwrap_or_else(|| User {
            handle: self.me.clone(),
            display_name: self.settings.display_name.clone(),
            bio: self.settings.bio.clone(),
            followers: 0,
            following: 0,
            posts_count: 0,
            avatar: Avatar::Text(String::new()),
        })
    }

    fn user(&self, handle: &Handle) -> Result<User, ApiError> {
        self.users.get(handle).cloned().ok_or_else(|| ApiError::not_found(Entity::User, handle))
    }

    fn search_users(&self, query: &str) -> Vec<User> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut users: Vec<User> =
            self.users.values().filter(|u| u.matches(&needle)).cloned().collect();
        users.sort_by(|a, b| a.handle.cmp(&b.handle));
        users
    }

    fn timeline(&self, limit: NonZeroUsize) -> Vec<Post> {
        let mut posts = self.posts_newest_first(&self.timeline);
        posts.truncate(limit.get());
        posts
    }

    fn discover_feed(&self, query: &str) -> Vec<Post> {
        let posts = self.posts_newest_first(&self.trending);
        match search::normalize_query(query) {
            Some(needle) => posts.into_iter().filter(|p| p.matches(&needle)).collect(),
            None => posts,
        }
    }

    fn posts_by(&self, handle: &Handle) -> Result<Vec<Post>, ApiError> {
        if !self.users.contains_key(handle) {
            return Err(ApiError::not_found(Entity::User, handle));
        }

        let mut posts: Vec<Post> =
            self.posts.values().filter(|p| p.author == *handle).cloned().collect();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(posts)
    }

    fn post(&self, id: &PostId) -> Result<Post, ApiError> {
        self.posts.get(id).cloned().ok_or_else(|| ApiError::not_found(Entity::Post, id))
    }

    fn create_post(&mut self, body: &str) -> Post {
        let id = PostId::new(self.generate_id("p"));
        let post = Post::new(id.clone(), self.me.clone(), body, self.clock.now());

        self.posts.insert(id.clone(), post.clone());
        self.timeline.insert(0, id);
        if let Some(me) = self.me_mut() {
            me.posts_count = me.posts_count.saturating_add(1);
        }

        tracing::debug!(post_id = %post.id, "created post");
        post
    }

    fn toggle_like(&mut self, id: &PostId) -> Result<Post, ApiError> {
        let post = self.post_mut(id)?;
        post.toggle_like();
        tracing::debug!(post_id = %id, liked = post.liked_by_me, "toggled like");
        Ok(post.clone())
    }

    fn toggle_repost(&mut self, id: &PostId) -> Result<Post, ApiError> {
        let post = self.post_mut(id)?;
        post.toggle_repost();
        tracing::debug!(post_id = %id, reposted = post.reposted_by_me, "toggled repost");
        Ok(post.clone())
    }

    fn comments(&self, post: &PostId) -> Result<Vec<Comment>, ApiError> {
        if !self.posts.contains_key(post) {
            return Err(ApiError::not_found(Entity::Post, post));
        }
        Ok(self.comments.get(post).cloned().unwrap_or_default())
    }

    fn add_comment(&mut self, post: &PostId, body: &str) -> Result<Comment, ApiError> {
        self.post_mut(post)?;

        let comment = Comment {
            id: CommentId::new(self.generate_id("cm")),
            post: post.clone(),
            author: self.me.clone(),
            body: body.to_string(),
            timestamp: self.clock.now(),
        };

        let target = self.post_mut(post)?;
        target.comments = target.comments.saturating_add(1);
        self.comments.entry(post.clone()).or_default().push(comment.clone());

        tracing::debug!(post_id = %post, comment_id = %comment.id, "added comment");
        Ok(comment)
    }

    fn conversations(&self) -> Vec<Conversation> {
        let mut conversations: Vec<Conversation> = self.conversations.values().cloned().collect();
        conversations.sort_by(|a, b| {
            b.last_activity().cmp(&a.last_activity()).then_with(|| a.id.cmp(&b.id))
        });
        conversations
    }

    fn messages(&self, conversation: &ConversationId) -> Result<Vec<Message>, ApiError> {
        self.conversations
            .get(conversation)
            .map(|c| c.messages.clone())
            .ok_or_else(|| ApiError::not_found(Entity::Conversation, conversation))
    }

    fn send_message(
        &mut self,
        conversation: &ConversationId,
        body: &str,
    ) -> Result<Message, ApiError> {
        self.conversation_mut(conversation)?;

        let message = Message {
            id: MessageId::new(self.generate_id("m")),
            conversation: conversation.clone(),
            sender: self.me.clone(),
            body: body.to_string(),
            timestamp: self.clock.now(),
            read: true,
        };

        self.conversation_mut(conversation)?.messages.push(message.clone());
        tracing::debug!(conversation_id = %conversation, message_id = %message.id, "sent message");
        Ok(message)
    }

    fn mark_conversation_read(&mut self, conversation: &ConversationId) -> Result<(), ApiError> {
        for message in &mut self.conversation_mut(conversation)?.messages {
            message.read = true;
        }
        Ok(())
    }

    fn notifications(&self, filter: NotificationFilter) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| filter == NotificationFilter::All || !n.read)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        notifications
    }

    fn mark_notification_read(&mut self, id: &NotificationId) -> Result<(), ApiError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == *id)
            .ok_or_else(|| ApiError::not_found(Entity::Notification, id))?;
        notification.read = true;
        Ok(())
    }

    fn settings(&self) -> UserSettings {
        self.settings.clone()
    }

    fn update_settings(&mut self, update: &SettingsUpdate) -> UserSettings {
        self.settings.apply(update);

        let settings = self.settings.clone();
        if let Some(me) = self.me_mut() {
            if update.display_name.is_some() {
                me.display_name.clone_from(&settings.display_name);
            }
            if update.bio.is_some() {
                me.bio.clone_from(&settings.bio);
            }
            if update.avatar_art.is_some() && !settings.avatar_art.is_empty() {
                me.avatar = Avatar::Art(settings.avatar_art.clone());
            }
        }

        tracing::debug!(?update, "updated settings");
        settings
    }
}

/// Move `feed` into the post table and return its ids in feed order.
fn index_posts(table: &mut HashMap<PostId, Post>, feed: Vec<Post>) -> Vec<PostId> {
    feed.into_iter()
        .map(|post| {
            let id = post.id.clone();
            table.entry(id.clone()).or_insert(post);
            id
        })
        .collect()
}
