//! Facade-to-Application translation layer.
//!
//! The [`Bridge`] owns a [`SocialApi`] provider and adapts it to the
//! application lifecycle.
//!
//! # Responsibilities
//!
//! - Converts data [`crate::AppAction`]s into facade calls.
//! - Converts results back into [`crate::AppEvent`]s to update the UI.
//! - Turns [`tuitter_core::ApiError`] into [`AppEvent::Error`] so a missing
//!   record shows up in the status line instead of aborting the loop.

use tuitter_core::{ApiError, ConversationId, Handle, PostId, SocialApi};

use crate::{AppAction, AppEvent};

/// Bridge between App and a data provider.
///
/// Generic over [`SocialApi`] so the runtime works the same against the mock
/// provider and any future network provider.
pub struct Bridge<A: SocialApi> {
    api: A,
}

impl<A: SocialApi> Bridge<A> {
    /// Create a new Bridge over `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The wrapped provider.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Process an App action and return resulting App events.
    pub fn process_app_action(&mut self, action: AppAction) -> Vec<AppEvent> {
        tracing::debug!(?action, "processing app action");

        let result = match action {
            AppAction::LoadCurrentUser => {
                Ok(vec![AppEvent::CurrentUserLoaded(self.api.current_user())])
            },
            AppAction::LoadTimeline { limit } => {
                Ok(vec![AppEvent::TimelineLoaded(self.api.timeline(limit))])
            },
            AppAction::LoadDiscover { query } => {
                let posts = self.api.discover_feed(&query);
                let users = self.api.search_users(&query);
                Ok(vec![AppEvent::DiscoverLoaded { query, posts, users }])
            },
            AppAction::LoadProfile { handle } => self.load_profile(&handle),
            AppAction::CreatePost { body } => {
                let post = self.api.create_post(&body);
                let me = self.api.current_user();
                Ok(vec![AppEvent::PostCreated(post), AppEvent::CurrentUserLoaded(me)])
            },
            AppAction::ToggleLike { post } => {
                self.api.toggle_like(&post).map(|p| vec![AppEvent::PostUpdated(p)])
            },
            AppAction::ToggleRepost { post } => {
                self.api.toggle_repost(&post).map(|p| vec![AppEvent::PostUpdated(p)])
            },
            AppAction::LoadComments { post } => self.api.post(&post).and_then(|post| {
                let comments = self.api.comments(&post.id)?;
                Ok(vec![AppEvent::CommentsLoaded { post, comments }])
            }),
            AppAction::AddComment { post, body } => self.add_comment(&post, &body),
            AppAction::LoadConversations => {
                Ok(vec![AppEvent::ConversationsLoaded(self.api.conversations())])
            },
            AppAction::OpenConversation { conversation } => self.open_conversation(conversation),
            AppAction::SendMessage { conversation, body } => self
                .api
                .send_message(&conversation, &body)
                .map(|message| vec![AppEvent::MessageSent(message)]),
            AppAction::LoadNotifications { filter } => {
                Ok(vec![AppEvent::NotificationsLoaded(self.api.notifications(filter))])
            },
            AppAction::MarkNotificationRead { notification } => self
                .api
                .mark_notification_read(&notification)
                .map(|()| vec![AppEvent::NotificationRead(notification)]),
            AppAction::LoadSettings => Ok(vec![AppEvent::SettingsLoaded(self.api.settings())]),
            AppAction::UpdateSettings { update } => {
                let settings = self.api.update_settings(&update);
                Ok(vec![
                    AppEvent::SettingsLoaded(settings),
                    AppEvent::CurrentUserLoaded(self.api.current_user()),
                ])
            },
            AppAction::Render | AppAction::Quit => Ok(vec![]),
        };

        Self::into_events(result)
    }

    fn load_profile(&self, handle: &Handle) -> Result<Vec<AppEvent>, ApiError> {
        let user = self.api.user(handle)?;
        let posts = self.api.posts_by(handle)?;
        Ok(vec![AppEvent::ProfileLoaded { user, posts }])
    }

    fn add_comment(&mut self, post: &PostId, body: &str) -> Result<Vec<AppEvent>, ApiError> {
        let comment = self.api.add_comment(post, body)?;
        let updated = self.api.post(post)?;
        Ok(vec![AppEvent::CommentAdded(comment), AppEvent::PostUpdated(updated)])
    }

    /// Load a thread, then mark it read and refresh unread counts.
    fn open_conversation(
        &mut self,
        conversation: ConversationId,
    ) -> Result<Vec<AppEvent>, ApiError> {
        let messages = self.api.messages(&conversation)?;
        self.api.mark_conversation_read(&conversation)?;
        Ok(vec![
            AppEvent::MessagesLoaded { conversation, messages },
            AppEvent::ConversationsLoaded(self.api.conversations()),
        ])
    }

    fn into_events(result: Result<Vec<AppEvent>, ApiError>) -> Vec<AppEvent> {
        match result {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(error = %e, "facade call failed");
                vec![AppEvent::Error { message: e.to_string() }]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use tuitter_core::{FakeApi, FixedClock, NotificationFilter, Timestamp};

    use super::*;

    fn bridge() -> Bridge<FakeApi<FixedClock>> {
        Bridge::new(FakeApi::with_clock(FixedClock(Timestamp::from_unix_secs(1_700_000_000))))
    }

    #[test]
    fn load_timeline_respects_limit() {
        let mut bridge = bridge();
        let limit = NonZeroUsize::MIN;
        let events = bridge.process_app_action(AppAction::LoadTimeline { limit });
        assert!(matches!(
            events.as_slice(),
            [AppEvent::TimelineLoaded(posts)] if posts.len() == 1
        ));
    }

    #[test]
    fn unknown_conversation_produces_error() {
        let mut bridge = bridge();
        let events = bridge.process_app_action(AppAction::OpenConversation {
            conversation: ConversationId::from("c99"),
        });
        assert!(matches!(
            events.as_slice(),
            [AppEvent::Error { message }] if message == "conversation not found: c99"
        ));
    }

    #[test]
    fn open_conversation_marks_read() {
        let mut bridge = bridge();
        let c1 = ConversationId::from("c1");
        let _ = bridge.process_app_action(AppAction::OpenConversation { conversation: c1.clone() });

        let unread = bridge.api().conversations().into_iter().find(|c| c.id == c1);
        assert_eq!(unread.map(|c| c.unread_count()), Some(0));
    }

    #[test]
    fn add_comment_refreshes_post() {
        let mut bridge = bridge();
        let events = bridge.process_app_action(AppAction::AddComment {
            post: PostId::from("3"),
            body: "agreed".into(),
        });
        assert!(matches!(events.as_slice(), [
            AppEvent::CommentAdded(_),
            AppEvent::PostUpdated(post)
        ] if post.comments == 1));
    }

    #[test]
    fn unknown_profile_produces_error() {
        let mut bridge = bridge();
        let events =
            bridge.process_app_action(AppAction::LoadProfile { handle: Handle::from("ghost") });
        assert!(matches!(events.as_slice(), [AppEvent::Error { .. }]));
    }

    #[test]
    fn mark_read_echoes_id() {
        let mut bridge = bridge();
        let events = bridge.process_app_action(AppAction::MarkNotificationRead {
            notification: "n2".into(),
        });
        assert!(matches!(
            events.as_slice(),
            [AppEvent::NotificationRead(id)] if id.as_str() == "n2"
        ));
        assert_eq!(bridge.api().notifications(NotificationFilter::UnreadOnly).len(), 5);
    }

    #[test]
    fn render_and_quit_are_ignored() {
        let mut bridge = bridge();
        assert!(bridge.process_app_action(AppAction::Render).is_empty());
        assert!(bridge.process_app_action(AppAction::Quit).is_empty());
    }
}
