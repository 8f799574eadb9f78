//! Static sample tables.
//!
//! [`SampleData`] is the pseudo-database a [`crate::FakeApi`] is built from.
//! It is populated once at startup, either from the built-in demo content or
//! from caller-supplied records (tests use the latter to pin exact tables).

use std::{collections::HashSet, time::Duration};

use crate::{
    Avatar, Comment, CommentId, Connections, Conversation, ConversationId, Handle, Message,
    MessageId, Notification, NotificationId, NotificationKind, Post, PostId, Timestamp, User,
    UserSettings,
};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

const MY_AVATAR: &str = "  [●▓▓●]\n  |≈ ◡ ≈|\n  |▓███▓|";
const MY_BIO: &str = "Building cool stuff with TUIs | vim enthusiast | developer";

/// Tables a mock provider serves from.
///
/// References between records are handles and ids only. Use
/// [`SampleData::dangling_references`] to check that every key resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    /// The signed-in user.
    pub me: User,
    /// Every other known user.
    pub users: Vec<User>,
    /// Home timeline posts.
    pub timeline: Vec<Post>,
    /// Trending posts served by the discover feed.
    pub trending: Vec<Post>,
    /// Direct-message threads.
    pub conversations: Vec<Conversation>,
    /// Activity notifications.
    pub notifications: Vec<Notification>,
    /// Comments under posts.
    pub comments: Vec<Comment>,
    /// The signed-in user's settings.
    pub settings: UserSettings,
}

impl SampleData {
    /// Empty tables around a single signed-in user. Settings mirror the
    /// user's profile with every preference at its default.
    pub fn minimal(me: User) -> Self {
        let avatar_art = match &me.avatar {
            Avatar::Art(art) => art.clone(),
            Avatar::Text(_) => String::new(),
        };
        let settings = UserSettings {
            display_name: me.display_name.clone(),
            bio: me.bio.clone(),
            avatar_art,
            email_notifications: true,
            show_online_status: true,
            private_account: false,
            connections: Connections::default(),
        };

        Self {
            me,
            users: Vec::new(),
            timeline: Vec::new(),
            trending: Vec::new(),
            conversations: Vec::new(),
            notifications: Vec::new(),
            comments: Vec::new(),
            settings,
        }
    }

    /// Add a user.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Add a home timeline post.
    #[must_use]
    pub fn with_timeline_post(mut self, post: Post) -> Self {
        self.timeline.push(post);
        self
    }

    /// Add a trending post.
    #[must_use]
    pub fn with_trending_post(mut self, post: Post) -> Self {
        self.trending.push(post);
        self
    }

    /// Add a conversation.
    #[must_use]
    pub fn with_conversation(mut self, conversation: Conversation) -> Self {
        self.conversations.push(conversation);
        self
    }

    /// Add a notification.
    #[must_use]
    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }

    /// Add a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Keys that do not resolve to a record, as `"<table>.<field>=<key>"`.
    ///
    /// Empty for consistent data.
    pub fn dangling_references(&self) -> Vec<String> {
        let handles: HashSet<&Handle> =
            std::iter::once(&self.me.handle).chain(self.users.iter().map(|u| &u.handle)).collect();
        let posts: HashSet<&PostId> =
            self.timeline.iter().chain(&self.trending).map(|p| &p.id).collect();

        let mut dangling = Vec::new();
        let mut check_handle = |table: &str, handle: &Handle| {
            if !handles.contains(handle) {
                dangling.push(format!("{table}={handle}"));
            }
        };

        for post in self.timeline.iter().chain(&self.trending) {
            check_handle("post.author", &post.author);
        }
        for convo in &self.conversations {
            for participant in &convo.participants {
                check_handle("conversation.participant", participant);
            }
            for msg in &convo.messages {
                check_handle("message.sender", &msg.sender);
            }
        }
        for notification in &self.notifications {
            check_handle("notification.actor", &notification.actor);
        }
        for comment in &self.comments {
            check_handle("comment.author", &comment.author);
        }

        for convo in &self.conversations {
            for msg in convo.messages.iter().filter(|m| m.conversation != convo.id) {
                dangling.push(format!("message.conversation={}", msg.conversation));
            }
        }
        for target in self.notifications.iter().filter_map(|n| n.target.as_ref()) {
            if !posts.contains(target) {
                dangling.push(format!("notification.target={target}"));
            }
        }
        for comment in &self.comments {
            if !posts.contains(&comment.post) {
                dangling.push(format!("comment.post={}", comment.post));
            }
        }

        dangling
    }

    /// Built-in demo content, with timestamps relative to `now`.
    pub fn builtin(now: Timestamp) -> Self {
        let ago = |secs: u64| now.before(Duration::from_secs(secs));

        let me = User {
            handle: Handle::from("yourname"),
            display_name: "Your Name".into(),
            bio: MY_BIO.into(),
            followers: 891,
            following: 328,
            posts_count: 142,
            avatar: Avatar::Art(MY_AVATAR.into()),
        };

        let mut data = Self::minimal(me);
        data.settings.connections.github = true;

        for (handle, name, bio, followers, following) in [
            ("alice", "Alice", "CLI tools and coffee", 1204, 310),
            ("bob", "Bob", "Refactoring enthusiast", 877, 401),
            ("charlie", "Charlie", "Hot takes about terminals", 455, 120),
            ("dana", "Dana", "Product person who ships", 632, 512),
            ("eve", "Eve", "Security nerd", 2301, 98),
            ("frank", "Frank", "Keyboard collector", 143, 260),
            ("techwriter", "Tech Writer", "Docs are a feature", 5120, 300),
            ("cliexpert", "CLI Expert", "Terminal > GUI", 8900, 150),
            ("vimfan", "Vim Fan", "hjkl forever", 3010, 222),
            ("johndoe", "John Doe", "Software engineer and coffee enthusiast ☕", 1543, 892),
            ("janesmith", "Jane Smith", "Designer | Creative thinker | Love minimalism 🎨", 2341, 456),
            ("alicewonder", "Alice Wonder", "Explorer of digital worlds | Tech blogger", 987, 234),
            ("opensource_dev", "Open Source Dev", "Building tools for developers", 1200, 80),
        ] {
            data.users.push(User {
                handle: Handle::from(handle),
                display_name: name.into(),
                bio: bio.into(),
                followers,
                following,
                posts_count: 0,
                avatar: Avatar::Text(initials(name)),
            });
        }

        data.timeline = vec![
            Post::new(
                "1",
                "yourname",
                "Just shipped a new feature! The TUI is looking amazing 🚀",
                ago(5 * MINUTE),
            )
            .with_counts(12, 3, 2)
            .liked(),
            Post::new(
                "2",
                "alice",
                "Working on a new CLI tool for developers. Any testers?",
                ago(15 * MINUTE),
            )
            .with_counts(45, 12, 1),
            Post::new(
                "3",
                "bob",
                "Refactoring is like cleaning your room. You know where everything is in the \
                 mess, but it's still better to organize it.",
                ago(HOUR),
            )
            .with_counts(234, 67, 0),
        ];

        data.trending = vec![
            Post::new(
                "10",
                "techwriter",
                "Just discovered this amazing TUI framework! The vim-style navigation is \
                 incredible. #vim #tui #opensource",
                ago(2 * HOUR),
            )
            .with_counts(234, 45, 0),
            Post::new(
                "11",
                "cliexpert",
                "Hot take: TUIs are making a comeback and I'm here for it! Terminal > GUI any \
                 day 💻 #cli #terminal",
                ago(4 * HOUR),
            )
            .with_counts(189, 52, 0),
            Post::new(
                "12",
                "vimfan",
                "Finally got my custom vim config working with this social network. The hjkl \
                 navigation feels so natural! #vim",
                ago(5 * HOUR),
            )
            .with_counts(156, 28, 0),
        ];

        for user in &mut data.users {
            let authored = data
                .timeline
                .iter()
                .chain(&data.trending)
                .filter(|post| post.author == user.handle)
                .count();
            user.posts_count = u32::try_from(authored).unwrap_or(u32::MAX);
        }

        let c1 = ConversationId::from("c1");
        let msg = |id: &str, convo: &ConversationId, sender: &str, body: &str, at, read| Message {
            id: MessageId::from(id),
            conversation: convo.clone(),
            sender: Handle::from(sender),
            body: body.into(),
            timestamp: at,
            read,
        };

        data.conversations = vec![
            Conversation {
                id: c1.clone(),
                participants: vec![Handle::from("yourname"), Handle::from("alice")],
                messages: vec![
                    msg(
                        "m1",
                        &c1,
                        "alice",
                        "Hey! Did you see the new feature I pushed?",
                        ago(15 * MINUTE),
                        true,
                    ),
                    msg("m2", &c1, "yourname", "Yes! It looks amazing! 🎉", ago(13 * MINUTE), true),
                    msg(
                        "m3",
                        &c1,
                        "yourname",
                        "The TUI design is so clean. How did you implement the navigation system?",
                        ago(12 * MINUTE),
                        true,
                    ),
                    msg(
                        "m4",
                        &c1,
                        "alice",
                        "Thanks! I used a state machine for the navigation. Want me to share the code?",
                        ago(8 * MINUTE),
                        false,
                    ),
                    msg(
                        "m5",
                        &c1,
                        "yourname",
                        "That would be great! Let me know if you need any help with testing.",
                        ago(2 * MINUTE),
                        true,
                    ),
                ],
            },
            conversation("c2", "charlie", "That sounds perfect!", ago(HOUR), false),
            conversation("c3", "bob", "Working on a new CLI tool...", ago(3 * HOUR), true),
            conversation("c4", "dana", "See you tomorrow!", ago(DAY), true),
        ];

        let notification = |id: &str, kind, actor: &str, target: Option<&str>, preview: &str, at| {
            Notification {
                id: NotificationId::from(id),
                kind,
                actor: Handle::from(actor),
                target: target.map(PostId::from),
                preview: preview.into(),
                timestamp: at,
                read: false,
            }
        };
        let shipped = "Just shipped a new feature! The TUI is looking amazing 🚀";

        data.notifications = vec![
            notification(
                "n1",
                NotificationKind::Mention,
                "charlie",
                Some("11"),
                "@yourname what do you think about this?",
                ago(5 * MINUTE),
            ),
            notification(
                "n2",
                NotificationKind::Like,
                "alice",
                Some("1"),
                shipped,
                ago(15 * MINUTE),
            ),
            notification("n3", NotificationKind::Like, "bob", Some("1"), shipped, ago(32 * MINUTE)),
            notification("n4", NotificationKind::Repost, "dana", Some("1"), shipped, ago(HOUR)),
            notification("n5", NotificationKind::Follow, "eve", None, "", ago(2 * HOUR)),
            notification("n6", NotificationKind::Like, "frank", Some("1"), shipped, ago(3 * HOUR)),
        ];

        let comment = |id: &str, post: &str, author: &str, body: &str, at| Comment {
            id: CommentId::from(id),
            post: PostId::from(post),
            author: Handle::from(author),
            body: body.into(),
            timestamp: at,
        };

        data.comments = vec![
            comment("cm1", "1", "alice", "Looks awesome!", ago(4 * MINUTE)),
            comment("cm2", "1", "bob", "🔥", ago(3 * MINUTE)),
            comment("cm3", "2", "charlie", "Count me in", ago(10 * MINUTE)),
        ];

        data
    }
}

/// One-message thread between the viewer and `with`.
fn conversation(id: &str, with: &str, last: &str, at: Timestamp, read: bool) -> Conversation {
    let id = ConversationId::from(id);
    Conversation {
        participants: vec![Handle::from("yourname"), Handle::from(with)],
        messages: vec![Message {
            id: MessageId::new(format!("{id}-m1")),
            conversation: id.clone(),
            sender: Handle::from(with),
            body: last.into(),
            timestamp: at,
            read,
        }],
        id,
    }
}

/// Up to two uppercase initials of a display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
