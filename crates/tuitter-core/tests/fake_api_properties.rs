//! Property-based tests for the mock provider.
//!
//! Tables are generated, then facade reads are checked against invariants
//! that must hold for any content.

use std::num::NonZeroUsize;

use proptest::prelude::*;
use tuitter_core::{
    Avatar, FakeApi, FixedClock, Handle, Post, SampleData, SettingsUpdate, SocialApi, Timestamp,
    User,
};

const AUTHORS: [&str; 3] = ["me", "alice", "bob"];

fn user(handle: &str) -> User {
    User {
        handle: Handle::from(handle),
        display_name: handle.to_string(),
        bio: String::new(),
        followers: 0,
        following: 0,
        posts_count: 0,
        avatar: Avatar::Text(String::new()),
    }
}

/// Generate posts with colliding timestamps and a small vocabulary so
/// queries actually hit.
fn posts_strategy() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(
        (0usize..AUTHORS.len(), "(rust|vim|tui|#rust|#cli| ){1,6}", 0u64..50),
        0..30,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (author, body, secs))| {
                Post::new(format!("p{i}"), AUTHORS[author], body, Timestamp::from_unix_secs(secs))
            })
            .collect()
    })
}

fn api_with(timeline: Vec<Post>, trending: Vec<Post>) -> FakeApi<FixedClock> {
    let mut data =
        SampleData::minimal(user("me")).with_user(user("alice")).with_user(user("bob"));
    data.timeline = timeline;
    data.trending = trending;
    FakeApi::from_data(data, FixedClock(Timestamp::from_unix_secs(1_000)))
}

fn settings_update_strategy() -> impl Strategy<Value = SettingsUpdate> {
    (
        proptest::option::of("[a-z ]{0,12}"),
        proptest::option::of("[a-z ]{0,24}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(display_name, bio, email, online, private)| SettingsUpdate {
            display_name,
            bio,
            email_notifications: email,
            show_online_status: online,
            private_account: private,
            ..SettingsUpdate::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_timeline_length_and_order(posts in posts_strategy(), limit in 1usize..40) {
        let available = posts.len();
        let api = api_with(posts, Vec::new());
        let limit = NonZeroUsize::new(limit).unwrap_or(NonZeroUsize::MIN);

        let timeline = api.timeline(limit);

        prop_assert_eq!(timeline.len(), limit.get().min(available));
        prop_assert!(timeline.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn prop_discover_filters_by_query(
        posts in posts_strategy(),
        query in "( ?)(rust|VIM|Tui|cli|alice|zzz| )( ?)",
    ) {
        let api = api_with(Vec::new(), posts);
        let needle = query.to_lowercase();

        for post in api.discover_feed(&query) {
            let hit = post.body.to_lowercase().contains(&needle)
                || post.author.as_str().contains(&needle)
                || post.tags.iter().any(|t| t.contains(&needle));
            prop_assert!(hit, "{:?} does not match {:?}", post, query);
        }
    }

    #[test]
    fn prop_discover_empty_query_returns_everything(posts in posts_strategy()) {
        let expected = posts.len();
        let api = api_with(Vec::new(), posts);

        let all = api.discover_feed("");

        prop_assert_eq!(all.len(), expected);
        prop_assert!(all.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn prop_update_settings_idempotent(update in settings_update_strategy()) {
        let mut api = FakeApi::with_clock(FixedClock(Timestamp::from_unix_secs(1_000)));

        let once = api.update_settings(&update);
        let twice = api.update_settings(&update);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(api.settings(), once);
    }
}
