//! Data-access layer for tuitter
//!
//! A stable, synchronous contract ([`SocialApi`]) for reading and mutating
//! social-network data, independent of whether the data comes from built-in
//! sample tables or a remote service.
//!
//! # Components
//!
//! - [`SocialApi`]: The facade every UI caller depends on
//! - [`FakeApi`]: Mock provider backed by [`SampleData`] tables
//! - [`Clock`]: Time source, so providers can run on a fixed clock in tests
//! - Entity model: [`User`], [`Post`], [`Message`], [`Conversation`],
//!   [`Notification`], [`Comment`], [`UserSettings`]
//!
//! # Relationships
//!
//! Entities refer to each other by key ([`Handle`], [`PostId`], ...), never
//! by ownership. A provider resolves keys against its own tables.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod error;
mod fake;
mod ids;
mod model;
mod sample;
pub mod search;
mod settings;
mod time;

pub use api::{NotificationFilter, SocialApi};
pub use error::{ApiError, Entity};
pub use fake::FakeApi;
pub use ids::{CommentId, ConversationId, Handle, MessageId, NotificationId, PostId};
pub use model::{
    Avatar, Comment, Conversation, Message, Notification, NotificationKind, Post, User,
};
pub use sample::SampleData;
pub use settings::{Connections, OAuthProvider, SettingsUpdate, UserSettings};
pub use time::{Clock, FixedClock, SystemClock, Timestamp};
