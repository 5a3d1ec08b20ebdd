// textviz - Terminal client for a text-to-visualization API
//
// Type a question about your data in plain English; the API picks a layout
// (bar, line or table) and returns the rows, and the client draws them.
//
// Architecture:
// - Backend (reqwest): POST {base_url}/query/text-to-viz, or built-in demo data
// - Viz: wire types plus pure dispatch from a result to a render model
// - TUI (ratatui): query input, error banner, chart area, sample queries
// - CLI (clap): one-shot `ask`, `health` probe and config management

mod backend;
mod cli;
mod config;
mod demo;
mod logging;
mod tui;
mod viz;

use anyhow::Result;
use backend::{HttpBackend, VizBackend};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use demo::DemoBackend;
use logging::{LogBuffer, LogSink};
use std::sync::Arc;
use tui::theme::ThemeKind;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management runs before the config file is loaded, so a broken
    // file can still be reset or edited
    if cli::handle_config_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: flags > env > file > defaults
    let config = Config::from_env().with_overrides(cli.base_url.clone(), cli.demo);

    // In TUI mode logs are captured into the buffer (prevents garbling the
    // display); headless commands log to stderr so stdout stays clean.
    // The file guard must live until exit for file logs to flush.
    let log_buffer = LogBuffer::new();
    let sink = if cli.command.is_none() {
        LogSink::Tui
    } else {
        LogSink::Stderr
    };
    let _file_guard = logging::init(&config.logging, sink, &log_buffer);

    let backend = build_backend(&config)?;
    tracing::debug!(
        backend = backend.name(),
        target = %backend.target(),
        "Backend ready"
    );

    match cli.command {
        None => tui::run_tui(backend, log_buffer, &config).await,
        Some(Commands::Ask {
            query,
            width,
            height,
        }) => {
            let theme = ThemeKind::from_name(&config.theme)
                .unwrap_or_default()
                .theme();
            cli::handle_ask(backend.as_ref(), &query, width, height, &theme).await
        }
        Some(Commands::Health) => cli::handle_health(backend.as_ref()).await,
        // Handled before the config was loaded
        Some(Commands::Config { .. }) => Ok(()),
    }
}

/// Demo data or the real API, depending on configuration
fn build_backend(config: &Config) -> Result<Arc<dyn VizBackend>> {
    if config.demo_mode {
        tracing::info!("Demo mode: answering from built-in sales data");
        return Ok(Arc::new(DemoBackend::new()));
    }
    Ok(Arc::new(HttpBackend::new(&config.base_url, config.timeout())?))
}
