//! # tubestat - London transport disruption board
//!
//! Polls the TfL unified API for disruptions on a configured set of lines
//! and scatters them over a console as colored cards, one per alert, with
//! a "last updated" card among them. Meant for a dedicated kiosk screen:
//! the console is blanked while there is nothing to report.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod app;
mod config;
pub mod constants;
mod feed;
mod models;
mod terminal;
mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;
use constants::{LOG_FILTER_ENV, MIN_CARD_WIDTH, MIN_INTERVAL_SECS};

/// tubestat - TfL disruption board for a console screen
#[derive(Parser, Debug)]
#[command(name = "tubestat", version, about = "Show London transport disruptions as cards on a console")]
struct Cli {
    /// Config file (default: ~/.config/tubestat/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Line-list path segment, e.g. "Line/Mode/tube,dlr" (overrides lines.txt)
    #[arg(long)]
    lines: Option<String>,

    /// File holding a TUBELINES= assignment
    #[arg(long, value_name = "PATH")]
    lines_file: Option<PathBuf>,

    /// Seconds between refreshes while disruptions are showing
    #[arg(long, short = 'r')]
    refresh: Option<u64>,

    /// Seconds between polls while there is nothing to show
    #[arg(long)]
    idle: Option<u64>,

    /// Alert card width in columns
    #[arg(long, short = 'w')]
    card_width: Option<usize>,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Leave console blanking alone
    #[arg(long)]
    no_blanking: bool,

    /// Message language (en, de)
    #[arg(long, short = 'l', value_name = "LANG")]
    lang: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(lines) = cli.lines.filter(|v| !v.trim().is_empty()) {
        config.lines = Some(lines);
    }
    if let Some(path) = cli.lines_file {
        config.lines_file = path;
    }
    if let Some(secs) = cli.refresh {
        config.refresh_secs = secs.max(MIN_INTERVAL_SECS);
    }
    if let Some(secs) = cli.idle {
        config.idle_secs = secs.max(MIN_INTERVAL_SECS);
    }
    if let Some(width) = cli.card_width {
        config.card_width = width.max(MIN_CARD_WIDTH);
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }
    if cli.no_blanking {
        config.blanking = false;
    }
    if let Some(lang) = cli.lang {
        config.lang = lang;
    }

    // Set message language (CLI > config > default "en")
    rust_i18n::set_locale(&config.lang);

    init_logging(&config.log_file);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tubestat starting");

    app::App::new(&config).run().await
}

/// Log to `path` in append mode. The console belongs to the cards, so when
/// the file cannot be opened logging is simply off.
fn init_logging(path: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
