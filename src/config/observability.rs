//! `[logging]` section: level filter and the optional JSON log file

use serde::Deserialize;
use std::path::PathBuf;

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, appended forever
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
///
/// Missing keys take their defaults, so a config file may carry only the
/// settings it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter level for this crate: trace, debug, info, warn, error
    pub level: String,
    /// Also write JSON lines to a file
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix ("textviz" -> "textviz.2024-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "textviz".to_string(),
        }
    }
}
