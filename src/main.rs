//! Library console - interactive book inventory and borrowing records

use std::io;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

use library_console::{config::LoggingConfig, console::Session, AppConfig, AppState};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting library console v{}", env!("CARGO_PKG_VERSION"));

    let mut state = AppState::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut state, stdin.lock(), stdout.lock())
        .run()
        .context("Console session failed")?;

    tracing::info!(
        "Session ended with {} book(s) and {} user(s)",
        state.services.repository().books.len(),
        state.services.repository().users.len()
    );
    Ok(())
}

/// Install the global subscriber, writing to a log file when a directory is configured
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_console={}", logging.level).into());

    let (writer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::never(directory, "library.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(io::stderr), None),
    };
    let ansi = logging.directory.is_none();

    let (json, pretty) = if logging.is_json() {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(ansi)
            .with_writer(writer);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();

    guard
}
