//! Command-line configuration.

use std::{num::NonZeroUsize, path::PathBuf, time::Duration};

use clap::Parser;
use tuitter_app::AppConfig;

/// tuitter terminal client
#[derive(Parser, Debug, Clone)]
#[command(name = "tuitter")]
#[command(about = "Terminal social client over a mock data provider")]
#[command(version)]
pub struct Args {
    /// Maximum number of posts loaded into the home timeline.
    #[arg(long, default_value = "50")]
    pub timeline_limit: NonZeroUsize,

    /// Milliseconds between ticks (status message expiry).
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(10..))]
    pub tick_ms: u64,

    /// Write logs to this file. Logging is off when unset.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved TUI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    /// Timeline posts requested per load.
    pub timeline_limit: NonZeroUsize,
    /// Interval between [`tuitter_app::AppEvent::Tick`]s.
    pub tick: Duration,
    /// Log destination. `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// Fallback log filter directive.
    pub log_level: String,
}

impl From<Args> for TuiConfig {
    fn from(args: Args) -> Self {
        Self {
            timeline_limit: args.timeline_limit,
            tick: Duration::from_millis(args.tick_ms),
            log_file: args.log_file,
            log_level: args.log_level,
        }
    }
}

impl TuiConfig {
    /// Options for the App state machine.
    pub fn app_config(&self) -> AppConfig {
        AppConfig { timeline_limit: self.timeline_limit }
    }
}
