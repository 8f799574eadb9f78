//! Application layer for tuitter
//!
//! Pure state machines and a generic runtime between the terminal shell and
//! the data-access facade, so navigation logic runs the same under test as
//! it does in a real terminal.
//!
//! # Components
//!
//! - [`App`]: UI state machine (screens, list cursors, key bindings)
//! - [`Bridge`]: Executes data actions against a [`tuitter_core::SocialApi`]
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod driver;
mod event;
mod input;
mod runtime;
mod screen;
mod state;

pub use action::AppAction;
pub use app::{App, AppConfig};
pub use bridge::Bridge;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use screen::Screen;
pub use state::{
    CommentsState, DiscoverState, ListCursor, MessagesState, NotificationsState,
    OpenConversation, ProfileState, SelectList, SettingsField, SettingsState,
};
