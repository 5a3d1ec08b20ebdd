//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render this config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let timeout = match self.timeout_secs {
            Some(secs) => format!("timeout_secs = {}", secs),
            None => "# timeout_secs = 30".to_string(),
        };

        format!(
            r#"# textviz configuration

# Base URL of the text-to-viz API
# Requests are sent to {{base_url}}/query/text-to-viz
base_url = "{base_url}"

# Request timeout in seconds (unset = transport default)
{timeout}

# Theme: Dark, Light, Monokai, Dracula, Nord, Solarized
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            base_url = escape(&self.base_url),
            timeout = timeout,
            theme = escape(&self.theme),
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
