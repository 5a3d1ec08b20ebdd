//! Configuration for the textviz client
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (`--base-url`, `--demo`)
//! 2. Environment variables
//! 3. Config file (~/.config/textviz/config.toml)
//! 4. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where the text-to-viz API lives when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default theme name
pub const DEFAULT_THEME: &str = "Dark";

/// Environment variables recognized by the loader
pub mod env {
    pub const API_URL: &str = "TEXTVIZ_API_URL";
    /// Name used by the browser front end's build; still honored
    pub const LEGACY_API_URL: &str = "REACT_APP_API_URL";
    pub const TIMEOUT_SECS: &str = "TEXTVIZ_TIMEOUT_SECS";
    pub const THEME: &str = "TEXTVIZ_THEME";
    pub const DEMO: &str = "TEXTVIZ_DEMO";
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the text-to-viz API (requests go to {base_url}/query/text-to-viz)
    pub base_url: String,

    /// Request timeout; None leaves the transport default in place
    pub timeout_secs: Option<u64>,

    /// Theme name: "Dark", "Light", "Monokai", "Dracula", "Nord", "Solarized"
    pub theme: String,

    /// Demo mode: answer from built-in data instead of calling the API
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            theme: DEFAULT_THEME.to_string(),
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Request timeout as a Duration (zero means "no timeout")
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<LoggingConfig>,
}

/// A config file that exists but cannot be used
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Explain the failure on stderr, with the way out
    pub fn report(&self) {
        eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
        match self {
            Self::Read { path, source } => {
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", source);
            }
            Self::Parse { path, source } => {
                eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", source);
                eprintln!("  Tip: Check for:\n");
                eprintln!("    - Missing quotes around string values");
                eprintln!("    - Invalid boolean values (use true/false)");
                eprintln!("    - Unknown file_rotation (use hourly, daily or never)\n");
            }
        }
        eprintln!("  To reset, run `textviz config --reset`.\n");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/textviz/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("textviz").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse the config file at `path`; a missing file is an empty config
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Like [`Config::load`], but a broken config file ends the process
    /// with a report instead of silently falling back to defaults.
    pub fn from_env() -> Self {
        Self::load().unwrap_or_else(|e| {
            e.report();
            std::process::exit(1)
        })
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        // A blank variable counts as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Base URL: env > legacy env > file > default
        let base_url = var(env::API_URL)
            .or_else(|| var(env::LEGACY_API_URL))
            .or(file.base_url)
            .unwrap_or(defaults.base_url);

        // Timeout: env > file > none
        let timeout_secs = var(env::TIMEOUT_SECS)
            .and_then(|v| v.trim().parse().ok())
            .or(file.timeout_secs);

        // Theme: env > file > default
        let theme = var(env::THEME).or(file.theme).unwrap_or(defaults.theme);

        // Demo mode: env only (runtime flag)
        let demo_mode = var(env::DEMO)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            base_url,
            timeout_secs,
            theme,
            demo_mode,
            logging: file.logging.unwrap_or_default(),
        }
    }

    /// Apply command-line overrides (highest precedence)
    pub fn with_overrides(mut self, base_url: Option<String>, demo: bool) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if demo {
            self.demo_mode = true;
        }
        self
    }
}
