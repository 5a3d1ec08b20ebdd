// CLI module - command-line argument parsing and handlers
//
// No subcommand runs the TUI. Subcommands:
// - ask <QUERY>: Submit one query and print the rendered visualization
// - health: Probe the API's /health endpoint
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Rewrite config with the current template (keeps values)
// - config --path: Show config file path

use crate::backend::VizBackend;
use crate::config::{Config, VERSION};
use crate::tui::offscreen::render_to_string;
use crate::tui::query_view::ERROR_PREFIX;
use crate::tui::theme::Theme;
use crate::tui::ui;
use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// textviz - Ask for data in plain English, get a chart in your terminal
#[derive(Parser, Debug)]
#[command(name = "textviz")]
#[command(version = VERSION)]
#[command(about = "Terminal client for a text-to-visualization API", long_about = None)]
pub struct Cli {
    /// API base URL (overrides config and TEXTVIZ_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Answer from built-in demo data instead of calling the API
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit one query and print the visualization
    Ask {
        /// Natural-language query, sent as typed
        query: String,

        /// Output width in columns
        #[arg(long, default_value_t = 100)]
        width: u16,

        /// Output height in rows
        #[arg(long, default_value_t = 30)]
        height: u16,
    },

    /// Check that the API is reachable
    Health,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// ask / health
// ─────────────────────────────────────────────────────────────────────────────

/// What `textviz ask` prints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutput {
    /// Visualization drawn off-screen, for stdout
    Rendered(String),
    /// Failure banner text, for stderr
    Failed(String),
}

/// Submit `query` once and render the answer
pub async fn ask(
    backend: &dyn VizBackend,
    query: &str,
    width: u16,
    height: u16,
    theme: &Theme,
) -> Result<AskOutput> {
    ensure!(!query.trim().is_empty(), "Query must not be empty");
    ensure!(width > 2 && height > 2, "Output area is too small");

    tracing::info!(backend = backend.name(), "Submitting query: {}", query);
    match backend.text_to_viz(query.to_string()).await {
        Ok(result) => {
            let text = render_to_string(width, height, |f| ui::draw_result(f, &result, theme))?;
            Ok(AskOutput::Rendered(text))
        }
        Err(e) => Ok(AskOutput::Failed(format!("{}{}", ERROR_PREFIX, e))),
    }
}

pub async fn handle_ask(
    backend: &dyn VizBackend,
    query: &str,
    width: u16,
    height: u16,
    theme: &Theme,
) -> Result<()> {
    match ask(backend, query, width, height, theme).await? {
        AskOutput::Rendered(text) => {
            print!("{}", text);
            Ok(())
        }
        AskOutput::Failed(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}

pub async fn handle_health(backend: &dyn VizBackend) -> Result<()> {
    match backend.health().await {
        Ok(health) => {
            println!("target   = {}", backend.target());
            println!("status   = {}", health.status);
            if let Some(database) = health.database {
                println!("database = {}", database);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Health check against {} failed: {}", backend.target(), e);
            std::process::exit(1);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

/// Handle `textviz config ...`; returns false for any other command
///
/// Runs before the config file is loaded, so a file that no longer parses
/// can still be located, reset or edited.
pub fn handle_config_command(cli: &Cli) -> bool {
    let Some(Commands::Config {
        show,
        reset,
        edit,
        update,
        path,
    }) = cli.command
    else {
        return false;
    };

    if path {
        handle_config_path();
    } else if show {
        handle_config_show(Config::from_env().with_overrides(cli.base_url.clone(), cli.demo));
    } else if reset {
        handle_config_reset();
    } else if edit {
        handle_config_edit();
    } else if update {
        handle_config_update();
    } else {
        // No flag provided, show help
        println!("Usage: textviz config [--show|--reset|--edit|--update|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --update  Update config with new defaults (preserves user values)");
        println!("  --path    Show config file path");
    }
    true
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show(config: Config) {
    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    println!("base_url = {:?}", config.base_url);
    match config.timeout_secs {
        Some(secs) => println!("timeout_secs = {}", secs),
        None => println!("# timeout_secs unset"),
    }
    println!("theme = {:?}", config.theme);
    println!("demo_mode = {}", config.demo_mode);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    match reset_config_at(&path, confirm_overwrite) {
        Ok(true) => println!("Config reset to defaults: {}", path.display()),
        Ok(false) => println!("Aborted."),
        Err(e) => {
            eprintln!("Error writing config: {}", e);
            std::process::exit(1);
        }
    }
}

/// Write the default template to `path`, asking first if a file is there.
/// The existing file is never parsed. Returns false if the user declined.
fn reset_config_at(path: &Path, confirm: impl FnOnce(&Path) -> bool) -> std::io::Result<bool> {
    if path.exists() && !confirm(path) {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // Config's single source of truth for the file format
    std::fs::write(path, Config::default().to_toml())?;
    Ok(true)
}

fn confirm_overwrite(path: &Path) -> bool {
    eprint!(
        "Config file exists at {}. Overwrite? [y/N] ",
        path.display()
    );
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    std::io::stdin().read_line(&mut input).is_ok() && input.trim().eq_ignore_ascii_case("y")
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Ensure config exists
    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        // No existing config, just create default
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Backup existing
    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    // Regenerate from file + env only, so one-off flags are not persisted.
    // A file that doesn't parse has no values to keep; --reset handles that.
    let existing = Config::from_env();

    // Write updated config
    if let Err(e) = std::fs::write(&path, existing.to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}
