//! Integration tests for the mock provider.
//!
//! Each test pins the exact tables with [`SampleData::minimal`] and the
//! builder methods, then checks the facade against them.

use std::num::NonZeroUsize;

use tuitter_core::{
    ApiError, Avatar, Conversation, ConversationId, Entity, FakeApi, FixedClock, Handle, Message,
    MessageId, NotificationFilter, OAuthProvider, Post, PostId, SampleData, SettingsUpdate,
    SocialApi, Timestamp, User,
};

const NOW: Timestamp = Timestamp::from_unix_secs(1_700_000_000);

fn user(handle: &str) -> User {
    User {
        handle: Handle::from(handle),
        display_name: handle.to_uppercase(),
        bio: String::new(),
        followers: 0,
        following: 0,
        posts_count: 0,
        avatar: Avatar::Text(handle.chars().take(1).collect()),
    }
}

fn message(id: &str, convo: &str, sender: &str, body: &str, secs: u64) -> Message {
    Message {
        id: MessageId::from(id),
        conversation: ConversationId::from(convo),
        sender: Handle::from(sender),
        body: body.into(),
        timestamp: Timestamp::from_unix_secs(secs),
        read: true,
    }
}

fn api(data: SampleData) -> FakeApi<FixedClock> {
    FakeApi::from_data(data, FixedClock(NOW))
}

#[test]
fn test_messages_in_stored_order() {
    let data = SampleData::minimal(user("me")).with_user(user("alice")).with_conversation(
        Conversation {
            id: ConversationId::from("c1"),
            participants: vec![Handle::from("me"), Handle::from("alice")],
            messages: vec![
                message("m1", "c1", "alice", "hi", 100),
                message("m2", "c1", "me", "hello back", 200),
            ],
        },
    );
    let api = api(data);

    let bodies: Vec<_> = api
        .messages(&ConversationId::from("c1"))
        .expect("c1 exists")
        .into_iter()
        .map(|m| m.body)
        .collect();
    assert_eq!(bodies, vec!["hi", "hello back"]);

    let err = api.messages(&ConversationId::from("c99")).expect_err("c99 is unknown");
    assert_eq!(err, ApiError::not_found(Entity::Conversation, "c99"));
    assert_eq!(err.to_string(), "conversation not found: c99");
}

#[test]
fn test_discover_single_tagged_post() {
    let rust_post = Post::new("t1", "alice", "Shipping it #rust", Timestamp::from_unix_secs(50));
    let data = SampleData::minimal(user("me"))
        .with_user(user("alice"))
        .with_trending_post(rust_post.clone())
        .with_trending_post(Post::new("t2", "alice", "Hello #go", Timestamp::from_unix_secs(60)))
        .with_trending_post(Post::new("t3", "me", "Plain text", Timestamp::from_unix_secs(70)));
    let api = api(data);

    assert_eq!(api.discover_feed("rust"), vec![rust_post.clone()]);
    assert_eq!(api.discover_feed("RUST"), vec![rust_post]);
    assert_eq!(api.discover_feed("").len(), 3);
}

#[test]
fn test_discover_whitespace_is_part_of_query() {
    let shipping = Post::new("t1", "me", "Shipping it #rust", Timestamp::from_unix_secs(1));
    let data = SampleData::minimal(user("me"))
        .with_trending_post(shipping)
        .with_trending_post(Post::new("t2", "me", "plain", Timestamp::from_unix_secs(2)));
    let api = api(data);

    assert!(api.discover_feed("   ").is_empty());
    assert!(api.discover_feed("rust ").is_empty());

    let ids: Vec<_> = api.discover_feed("it #").into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PostId::from("t1")]);
}

#[test]
fn test_discover_matches_author_handle() {
    let data = SampleData::minimal(user("me"))
        .with_user(user("vimfan"))
        .with_trending_post(Post::new("t1", "vimfan", "hjkl", Timestamp::from_unix_secs(1)))
        .with_trending_post(Post::new("t2", "me", "emacs", Timestamp::from_unix_secs(2)));

    let ids: Vec<_> = api(data).discover_feed("VIM").into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PostId::from("t1")]);
}

#[test]
fn test_timeline_on_empty_tables() {
    let api = api(SampleData::minimal(user("me")));
    assert!(api.timeline(NonZeroUsize::MIN).is_empty());
    assert!(api.conversations().is_empty());
    assert!(api.notifications(NotificationFilter::All).is_empty());
}

#[test]
fn test_like_toggle_twice_restores_post() {
    let mut api = FakeApi::with_clock(FixedClock(NOW));
    let id = PostId::from("3");
    let original = api.post(&id).expect("builtin post");

    let liked = api.toggle_like(&id).expect("builtin post");
    assert!(liked.liked_by_me);
    assert_eq!(liked.likes, original.likes + 1);

    let restored = api.toggle_like(&id).expect("builtin post");
    assert_eq!(restored, original);
}

#[test]
fn test_repost_counter_never_underflows() {
    let post = Post::new("p", "me", "zero", NOW);
    let mut data = SampleData::minimal(user("me")).with_timeline_post(post);
    data.timeline[0].reposted_by_me = true;
    let mut api = api(data);

    let undone = api.toggle_repost(&PostId::from("p")).expect("post exists");
    assert!(!undone.reposted_by_me);
    assert_eq!(undone.reposts, 0);
}

#[test]
fn test_settings_merge_and_idempotence() {
    let mut api = FakeApi::with_clock(FixedClock(NOW));
    let update = SettingsUpdate {
        private_account: Some(true),
        email_notifications: Some(false),
        connections: vec![(OAuthProvider::Google, true), (OAuthProvider::GitHub, false)],
        ..SettingsUpdate::default()
    };

    let once = api.update_settings(&update);
    let twice = api.update_settings(&update);

    assert_eq!(once, twice);
    assert_eq!(api.settings(), once);
    assert!(once.private_account);
    assert!(!once.email_notifications);
    assert!(once.connections.google);
    assert!(!once.connections.github);
    assert!(once.show_online_status);
}

#[test]
fn test_avatar_update_reaches_profile() {
    let mut api = FakeApi::with_clock(FixedClock(NOW));
    let update = SettingsUpdate { avatar_art: Some("(o_o)".into()), ..SettingsUpdate::default() };

    api.update_settings(&update);

    assert_eq!(api.current_user().avatar, Avatar::Art("(o_o)".into()));
}

#[test]
fn test_posts_by_collects_across_feeds() {
    let mut api = FakeApi::with_clock(FixedClock(NOW));
    let created = api.create_post("first from the cli");

    let mine = api.posts_by(&Handle::from("yourname")).expect("current user exists");

    assert_eq!(mine.first(), Some(&created));
    assert!(mine.iter().all(|p| p.author == Handle::from("yourname")));
    assert!(mine.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[test]
fn test_send_message_to_unknown_conversation() {
    let mut api = FakeApi::with_clock(FixedClock(NOW));
    let err = api.send_message(&ConversationId::from("nope"), "hi").expect_err("unknown");
    assert_eq!(err, ApiError::not_found(Entity::Conversation, "nope"));
}

#[test]
fn test_generated_ids_are_sequential() {
    let mut api = FakeApi::with_clock(FixedClock(NOW));
    let a = api.create_post("a");
    let b = api.create_post("b");
    let m = api.send_message(&ConversationId::from("c1"), "c").expect("c1 exists");

    assert_eq!(a.id, PostId::from("p1000"));
    assert_eq!(b.id, PostId::from("p1001"));
    assert_eq!(m.id, MessageId::from("m1002"));
}
