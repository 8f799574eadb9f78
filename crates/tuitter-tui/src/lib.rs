//! Terminal UI for tuitter
//!
//! A thin shell over [`tuitter_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`tuitter_app::Runtime`].
//!
//! This crate only handles terminal rendering, text prompts and command-line
//! configuration.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod input;
pub mod terminal;
pub mod ui;

pub use config::{Args, TuiConfig};
pub use input::{InputState, Prompt};
pub use terminal::{TerminalDriver, TerminalError};
pub use tuitter_app::{App, AppAction, AppEvent, Bridge, Driver, KeyInput, Runtime};
