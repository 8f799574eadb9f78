//! tuitter TUI entry point.

use std::{fs::File, sync::Mutex};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tuitter_core::FakeApi;
use tuitter_tui::{Args, Runtime, TerminalDriver, TuiConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TuiConfig::from(Args::parse());
    init_logging(&config)?;

    tracing::info!(limit = config.timeline_limit.get(), tick = ?config.tick, "starting tuitter");

    let driver = TerminalDriver::new(config.tick)?;
    let mut runtime = Runtime::new(driver, FakeApi::new(), config.app_config());
    runtime.run().await?;

    tracing::info!("tuitter exited");
    Ok(())
}

/// Install a file logger. The terminal belongs to the UI, so nothing is
/// logged without `--log-file`.
fn init_logging(config: &TuiConfig) -> Result<(), std::io::Error> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}
