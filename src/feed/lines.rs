//! `lines.txt`: which lines to ask the feed about.
//!
//! The file holds a shell-style assignment such as
//! `TUBELINES='Line/Mode/tube,dlr,overground'`; the value is the path
//! segment placed before `/Disruption`.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::LINES_KEY;

#[derive(Debug, Error)]
pub enum LinesError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TUBELINES not found in {0}")]
    Missing(PathBuf),
}

/// Read the line-list segment from `path`.
pub fn load_lines(path: &Path) -> Result<String, LinesError> {
    let content = std::fs::read_to_string(path).map_err(|source| LinesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(&content).ok_or_else(|| LinesError::Missing(path.to_path_buf()))
}

/// First `TUBELINES=` assignment in `content`, with surrounding quotes removed.
pub fn parse_lines(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(LINES_KEY))
        .map(|value| value.trim_matches(|c| c == '\'' || c == '"').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_single_quoted() {
        assert_eq!(
            parse_lines("TUBELINES='Line/Mode/tube,dlr'\n").as_deref(),
            Some("Line/Mode/tube,dlr")
        );
    }

    #[test]
    fn parse_double_quoted_and_unquoted() {
        assert_eq!(parse_lines("TUBELINES=\"Line/central\"").as_deref(), Some("Line/central"));
        assert_eq!(parse_lines("TUBELINES=Line/victoria").as_deref(), Some("Line/victoria"));
    }

    #[test]
    fn parse_skips_comments_and_other_keys() {
        let content = "# TUBELINES='Line/commented'\nOTHER=1\n  TUBELINES='Line/jubilee'  \n";
        assert_eq!(parse_lines(content).as_deref(), Some("Line/jubilee"));
    }

    #[test]
    fn parse_missing_key() {
        assert_eq!(parse_lines("LINES=foo\n"), None);
        assert_eq!(parse_lines(""), None);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# lines to watch\nTUBELINES='Line/Mode/tube,elizabeth-line'").unwrap();
        assert_eq!(load_lines(file.path()).unwrap(), "Line/Mode/tube,elizabeth-line");
    }

    #[test]
    fn load_without_key_is_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nothing here").unwrap();
        assert!(matches!(load_lines(file.path()), Err(LinesError::Missing(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_lines(Path::new("/nonexistent/lines.txt")).unwrap_err();
        assert!(matches!(err, LinesError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/lines.txt"));
    }
}
