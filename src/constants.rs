//! Application-wide constants.
//!
//! Card geometry, timing defaults, feed settings and file locations live
//! here so the layout code and the poll loop agree on the same numbers.

use std::path::PathBuf;

// ── Card Geometry ─────────────────────────────────────────────────
/// Default width of an alert card, in terminal columns.
pub const CARD_WIDTH: usize = 60;
/// Smallest card that still has one content column inside its frame.
pub const MIN_CARD_WIDTH: usize = 5;
/// Columns taken by the frame: two border characters plus two padding spaces.
pub const CARD_FRAME_COLS: usize = 4;
/// Rows taken by the top and bottom borders.
pub const CARD_FRAME_ROWS: usize = 2;
/// Visible width of the severe badge `"⚠ SEVERE ⚠ "`, trailing space included.
pub const BADGE_WIDTH: usize = 11;
/// Badge text rendered in front of an urgent card's first line.
pub const BADGE_TEXT: &str = "⚠ SEVERE ⚠";

// ── Placement ─────────────────────────────────────────────────────
/// Random positions tried per card before it is dropped from the screen.
pub const PLACEMENT_ATTEMPTS: usize = 100;
/// Terminal rows assumed when the size query fails.
pub const FALLBACK_LINES: u16 = 24;
/// Terminal columns assumed when the size query fails.
pub const FALLBACK_COLUMNS: u16 = 80;

// ── Items ─────────────────────────────────────────────────────────
/// Category key of the synthetic timestamp card.
pub const STATUS_CATEGORY: &str = "updated";
/// Timestamp format of the status card.
pub const STATUS_TIME_FORMAT: &str = "%a %d %b %H:%M:%S";
/// Delimiter between the line name and the alert body.
pub const CATEGORY_DELIMITER: &str = ": ";
/// Category used when an alert has no usable first token.
pub const UNKNOWN_CATEGORY: &str = "unknown";
/// Default case-insensitive marker that makes a card urgent.
pub const DEFAULT_URGENCY_MARKER: &str = "severe";

// ── Timing ────────────────────────────────────────────────────────
/// Seconds between refreshes while disruptions are showing.
pub const DEFAULT_REFRESH_SECS: u64 = 60;
/// Seconds between polls while the feed reports nothing.
pub const DEFAULT_IDLE_SECS: u64 = 30;
/// Seconds to wait after a failed cycle.
pub const DEFAULT_RETRY_SECS: u64 = 30;
/// HTTP timeout for one feed request.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
/// Lower bound for any configured interval.
pub const MIN_INTERVAL_SECS: u64 = 1;

// ── Feed ──────────────────────────────────────────────────────────
/// Base URL of the TfL unified API.
pub const DEFAULT_API_BASE: &str = "https://api.tfl.gov.uk";
/// Path suffix of the disruption endpoint.
pub const DISRUPTION_PATH: &str = "Disruption";
/// User agent sent with feed requests; the API rejects some default agents.
pub const FEED_USER_AGENT: &str = "curl/7.88";
/// Key in `lines.txt` that holds the line-list path segment.
pub const LINES_KEY: &str = "TUBELINES=";
/// Default name of the line-list file.
pub const DEFAULT_LINES_FILE: &str = "lines.txt";

// ── Logging ───────────────────────────────────────────────────────
/// Default log file (append-only).
pub const DEFAULT_LOG_FILE: &str = "/tmp/tubestat.log";
/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "TUBESTAT_LOG";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/tubestat/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("tubestat")
}

/// Returns `~/.config/tubestat/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/tubestat/colors.toml`.
pub fn colors_file_path() -> PathBuf {
    config_dir().join("colors.toml")
}

/// Returns the default `lines.txt`: beside the executable when present,
/// otherwise in the working directory.
pub fn default_lines_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_LINES_FILE)))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LINES_FILE))
}
