// Commitpad - conventional commit composer for the terminal
//
// A live form for assembling a conventional-commit message: pick a type,
// fill in scope/subject/body/footer, flag breaking changes, watch the
// preview update, and copy the result to the clipboard.
//
// Architecture:
// - message: the pure form-to-message template
// - tui (ratatui): form editing, debounced preview, clipboard, themes
// - config: toml config file, doubles as the persisted theme store
// - logging: in-memory capture so tracing output never garbles the screen

mod cli;
mod config;
mod logging;
mod message;
mod tui;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Log capture for the TUI session
    let log_buffer = LogBuffer::new();

    // Initialize tracing. All output goes to the in-memory buffer while the
    // TUI owns the screen; file logging is additional when enabled.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("commitpad={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the program's duration so logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        "commitpad.log",
                    );
                    let (writer, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .with_writer(writer)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: could not create log directory {:?}: {e}",
                        config.logging.file_dir
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!("commitpad v{} starting", config::VERSION);

    tui::run_tui(log_buffer, config).await
}
