use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::feed::lines::{load_lines, LinesError};

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/tubestat/config.toml and then CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the status API.
    pub api_base: String,
    /// Line-list path segment. When unset, read from `lines_file`.
    pub lines: Option<String>,
    /// File holding a `TUBELINES=` assignment.
    pub lines_file: PathBuf,
    /// Seconds between refreshes while disruptions are showing.
    pub refresh_secs: u64,
    /// Seconds between polls while there is nothing to show.
    pub idle_secs: u64,
    /// Seconds to wait after a failed cycle.
    pub retry_secs: u64,
    /// HTTP timeout for one fetch.
    pub fetch_timeout_secs: u64,
    /// Width of alert cards, in columns.
    pub card_width: usize,
    /// Case-insensitive text that makes a card show the severe badge.
    pub urgency_marker: String,
    /// Optional TOML file overriding line colors.
    pub colors_file: Option<PathBuf>,
    /// Append-only log file.
    pub log_file: PathBuf,
    /// Command run at start-up, e.g. to dim the backlight.
    pub dim_command: Option<String>,
    /// Command run at exit, e.g. to restore the backlight.
    pub bright_command: Option<String>,
    /// Drive console blanking with `setterm`.
    pub blanking: bool,
    /// Message language (en, de).
    pub lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            lines: None,
            lines_file: default_lines_file(),
            refresh_secs: DEFAULT_REFRESH_SECS,
            idle_secs: DEFAULT_IDLE_SECS,
            retry_secs: DEFAULT_RETRY_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            card_width: CARD_WIDTH,
            urgency_marker: DEFAULT_URGENCY_MARKER.to_string(),
            colors_file: Some(colors_file_path()),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            dim_command: None,
            bright_command: None,
            blanking: true,
            lang: "en".to_string(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    api_base: Option<String>,
    lines: Option<String>,
    lines_file: Option<PathBuf>,
    refresh_secs: Option<u64>,
    idle_secs: Option<u64>,
    retry_secs: Option<u64>,
    fetch_timeout_secs: Option<u64>,
    card_width: Option<usize>,
    urgency_marker: Option<String>,
    colors_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    dim_command: Option<String>,
    bright_command: Option<String>,
    blanking: Option<bool>,
    lang: Option<String>,
}

impl Config {
    /// Load config from ~/.config/tubestat/config.toml, falling back to
    /// defaults for any missing fields.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from `path`. A missing file gives pure defaults; a
    /// malformed one prints a warning and also gives defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return config, // No config file, use defaults
        };

        let file_config: FileConfig = match toml::from_str(&content) {
            Ok(fc) => fc,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                return config;
            }
        };

        config.merge(file_config);
        config
    }

    fn merge(&mut self, file: FileConfig) {
        if let Some(v) = file.api_base.filter(|v| !v.is_empty()) {
            self.api_base = v;
        }
        if let Some(v) = file.lines.filter(|v| !v.is_empty()) {
            self.lines = Some(v);
        }
        if let Some(v) = file.lines_file {
            self.lines_file = v;
        }
        if let Some(v) = file.refresh_secs {
            self.refresh_secs = v.max(MIN_INTERVAL_SECS);
        }
        if let Some(v) = file.idle_secs {
            self.idle_secs = v.max(MIN_INTERVAL_SECS);
        }
        if let Some(v) = file.retry_secs {
            self.retry_secs = v.max(MIN_INTERVAL_SECS);
        }
        if let Some(v) = file.fetch_timeout_secs {
            self.fetch_timeout_secs = v.max(MIN_INTERVAL_SECS);
        }
        if let Some(v) = file.card_width {
            self.card_width = v.max(MIN_CARD_WIDTH);
        }
        if let Some(v) = file.urgency_marker {
            // Empty disables the badge.
            self.urgency_marker = v;
        }
        if let Some(v) = file.colors_file {
            self.colors_file = Some(v);
        }
        if let Some(v) = file.log_file {
            self.log_file = v;
        }
        if let Some(v) = file.dim_command.filter(|v| !v.trim().is_empty()) {
            self.dim_command = Some(v);
        }
        if let Some(v) = file.bright_command.filter(|v| !v.trim().is_empty()) {
            self.bright_command = Some(v);
        }
        if let Some(v) = file.blanking {
            self.blanking = v;
        }
        if let Some(v) = file.lang.filter(|v| !v.is_empty()) {
            self.lang = v;
        }
    }

    /// The line-list segment: the configured value, else `lines_file`.
    pub fn resolve_lines(&self) -> Result<String, LinesError> {
        match &self.lines {
            Some(lines) => Ok(lines.clone()),
            None => load_lines(&self.lines_file),
        }
    }
}
