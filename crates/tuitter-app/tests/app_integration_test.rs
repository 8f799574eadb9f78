//! Integration tests for App and Bridge behavior.
//!
//! # Oracle Pattern
//!
//! Tests drive the App with keys, route its actions through a Bridge over
//! the built-in mock provider, and end with oracle checks that verify:
//! - App state reflects the provider's state
//! - Mutations made through the App are visible in later facade reads

use std::num::NonZeroUsize;

use tuitter_app::{App, AppAction, AppConfig, AppEvent, Bridge, KeyInput, Screen, SettingsField};
use tuitter_core::{
    ConversationId, FakeApi, FixedClock, Handle, NotificationFilter, OAuthProvider, PostId,
    SocialApi, Timestamp,
};

const NOW: Timestamp = Timestamp::from_unix_secs(1_700_000_000);

type TestBridge = Bridge<FakeApi<FixedClock>>;

fn setup() -> (App, TestBridge) {
    let mut app = App::new(AppConfig::default());
    let mut bridge = Bridge::new(FakeApi::with_clock(FixedClock(NOW)));
    let actions = app.start();
    process_actions(&mut app, &mut bridge, actions);
    (app, bridge)
}

/// Process actions from App through Bridge and update App state.
///
/// Returns `true` if the App asked to quit.
fn process_actions(app: &mut App, bridge: &mut TestBridge, actions: Vec<AppAction>) -> bool {
    let mut pending = actions;
    while !pending.is_empty() {
        for action in std::mem::take(&mut pending) {
            match action {
                AppAction::Quit => return true,
                AppAction::Render => {},
                data => {
                    for event in bridge.process_app_action(data) {
                        pending.extend(app.handle(event));
                    }
                },
            }
        }
    }
    false
}

fn press(app: &mut App, bridge: &mut TestBridge, key: KeyInput) -> bool {
    let actions = app.handle(AppEvent::Key(key));
    process_actions(app, bridge, actions)
}

fn press_char(app: &mut App, bridge: &mut TestBridge, c: char) -> bool {
    press(app, bridge, KeyInput::Char(c))
}

#[test]
fn test_start_loads_timeline_and_user() {
    let (app, bridge) = setup();

    assert_eq!(app.me().map(|u| u.handle.as_str()), Some("yourname"));
    let limit = NonZeroUsize::new(50).unwrap_or(NonZeroUsize::MIN);
    assert_eq!(app.timeline().items(), bridge.api().timeline(limit));
}

#[test]
fn test_like_round_trip() {
    let (mut app, mut bridge) = setup();
    press_char(&mut app, &mut bridge, 'j');
    press_char(&mut app, &mut bridge, 'l');

    let in_app = app.timeline().selected().cloned().expect("timeline loaded");
    let in_api = bridge.api().post(&in_app.id).expect("post exists");
    assert!(in_app.liked_by_me);
    assert_eq!(in_app, in_api);
}

#[test]
fn test_create_post_shows_on_top() {
    let (mut app, mut bridge) = setup();
    let before = app.me().map(|u| u.posts_count).unwrap_or_default();

    let actions = app.create_post("hello from the terminal #rust");
    process_actions(&mut app, &mut bridge, actions);

    let top = app.timeline().items().first().expect("timeline not empty");
    assert_eq!(top.body, "hello from the terminal #rust");
    assert_eq!(app.timeline().selected(), Some(top));
    assert_eq!(app.me().map(|u| u.posts_count), Some(before + 1));
    assert_eq!(app.status_message(), Some("Posted"));
}

#[test]
fn test_create_post_keeps_timeline_within_limit() {
    let limit = NonZeroUsize::new(2).unwrap_or(NonZeroUsize::MIN);
    let mut app = App::new(AppConfig { timeline_limit: limit });
    let mut bridge = Bridge::new(FakeApi::with_clock(FixedClock(NOW)));
    let actions = app.start();
    process_actions(&mut app, &mut bridge, actions);
    assert_eq!(app.timeline().items().len(), 2);

    let actions = app.create_post("one more");
    process_actions(&mut app, &mut bridge, actions);

    assert_eq!(app.timeline().items().len(), 2);
    assert_eq!(app.timeline().items(), bridge.api().timeline(limit));
    assert_eq!(app.timeline().selected().map(|p| p.body.as_str()), Some("one more"));
}

#[test]
fn test_open_conversation_and_reply() {
    let (mut app, mut bridge) = setup();
    press_char(&mut app, &mut bridge, '4');
    assert_eq!(app.screen(), Screen::Messages);
    assert_eq!(app.messages().conversations.items().len(), 4);

    press(&mut app, &mut bridge, KeyInput::Enter);
    let open = app.messages().open.as_ref().expect("conversation opened");
    assert_eq!(open.id, ConversationId::from("c1"));
    assert_eq!(open.messages.items().len(), 5);
    let listed = app.messages().conversations.items().iter().find(|c| c.id == open.id);
    assert_eq!(listed.map(|c| c.unread_count()), Some(0));

    let actions = app.send_message("sending the link now");
    process_actions(&mut app, &mut bridge, actions);

    let open = app.messages().open.as_ref().expect("still open");
    assert_eq!(open.messages.selected().map(|m| m.body.as_str()), Some("sending the link now"));
    let stored = bridge.api().messages(&ConversationId::from("c1")).expect("c1 exists");
    assert_eq!(stored.len(), 6);

    press(&mut app, &mut bridge, KeyInput::Esc);
    assert!(app.messages().open.is_none());
}

#[test]
fn test_comments_overlay() {
    let (mut app, mut bridge) = setup();
    press(&mut app, &mut bridge, KeyInput::Enter);

    let overlay = app.comments().expect("overlay open");
    assert_eq!(overlay.post.id, PostId::from("1"));
    assert_eq!(overlay.comments.items().len(), 2);

    let actions = app.add_comment("thanks all");
    process_actions(&mut app, &mut bridge, actions);

    let overlay = app.comments().expect("overlay open");
    assert_eq!(overlay.comments.items().len(), 3);
    assert_eq!(overlay.post.comments, 3);
    assert_eq!(app.timeline().items().first().map(|p| p.comments), Some(3));
}

#[test]
fn test_notifications_unread_flow() {
    let (mut app, mut bridge) = setup();
    press_char(&mut app, &mut bridge, '3');
    assert_eq!(app.notifications().unread_count(), 6);

    press(&mut app, &mut bridge, KeyInput::Enter);
    assert_eq!(app.notifications().unread_count(), 5);

    press_char(&mut app, &mut bridge, 'u');
    assert_eq!(app.notifications().filter, NotificationFilter::UnreadOnly);
    assert_eq!(app.notifications().items.items().len(), 5);
    assert_eq!(bridge.api().notifications(NotificationFilter::UnreadOnly).len(), 5);
}

#[test]
fn test_settings_toggle_connection() {
    let (mut app, mut bridge) = setup();
    press_char(&mut app, &mut bridge, '5');

    let target = SettingsField::Connection(OAuthProvider::GitLab);
    while app.settings().selected_field() != Some(target) {
        press_char(&mut app, &mut bridge, 'j');
    }
    press(&mut app, &mut bridge, KeyInput::Enter);

    assert!(bridge.api().settings().connections.gitlab);
    assert_eq!(app.settings().settings.as_ref().map(|s| s.connections.gitlab), Some(true));
}

#[test]
fn test_search_switches_to_discover() {
    let (mut app, mut bridge) = setup();
    let actions = app.search("#vim");
    process_actions(&mut app, &mut bridge, actions);

    assert_eq!(app.screen(), Screen::Discover);
    let ids: Vec<_> = app.discover().posts.items().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["10", "12"]);
}

#[test]
fn test_profile_of_other_user() {
    let (mut app, mut bridge) = setup();
    let actions = app.open_profile(Some(Handle::from("alice")));
    process_actions(&mut app, &mut bridge, actions);

    assert_eq!(app.profile().user.as_ref().map(|u| u.handle.as_str()), Some("alice"));
    assert!(app.profile().posts.items().iter().all(|p| p.author == Handle::from("alice")));
}

#[test]
fn test_error_lands_in_status_line() {
    let (mut app, mut bridge) = setup();
    let actions = app.open_profile(Some(Handle::from("ghost")));
    process_actions(&mut app, &mut bridge, actions);

    assert_eq!(app.status_message(), Some("Error: user not found: ghost"));
}

#[test]
fn test_quit_key() {
    let (mut app, mut bridge) = setup();
    assert!(press_char(&mut app, &mut bridge, 'q'));
}
