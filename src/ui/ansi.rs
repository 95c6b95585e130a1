//! Escape sequences and a small builder that keeps them out of width math.
//!
//! Everything the display writes goes through [`StyledLine`]: control
//! sequences are appended with [`StyledLine::control`] and count zero
//! columns, visible text is appended with [`StyledLine::text`] and counted
//! with `unicode-width`. Card padding is computed from the tracked width,
//! never from the byte length of the assembled string.

use unicode_width::UnicodeWidthStr;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Bold text.
pub const BOLD: &str = "\x1b[1m";

/// Blinking text.
pub const BLINK: &str = "\x1b[5m";

/// Move the cursor home and clear the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Absolute cursor move to a 1-indexed `(row, col)`.
pub fn goto(row: usize, col: usize) -> String {
    format!("\x1b[{};{}f", row, col)
}

/// Wrap raw SGR parameters (e.g. `"48;2;0;0;0"`) into a full sequence.
pub fn sgr(params: &str) -> String {
    format!("\x1b[{}m", params)
}

/// One line of output with its visible width tracked alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    buf: String,
    width: usize,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a zero-width control sequence.
    pub fn control(mut self, seq: &str) -> Self {
        self.buf.push_str(seq);
        self
    }

    /// Append visible text.
    pub fn text(mut self, text: &str) -> Self {
        self.buf.push_str(text);
        self.width += text.width();
        self
    }

    /// Append `count` copies of a single-column character.
    pub fn fill(mut self, ch: char, count: usize) -> Self {
        self.buf.extend(std::iter::repeat(ch).take(count));
        self.width += count;
        self
    }

    /// Pad with spaces until the visible width reaches `target`.
    pub fn pad_to(self, target: usize) -> Self {
        let missing = target.saturating_sub(self.width);
        self.fill(' ', missing)
    }

    /// Append a styled run: `style`, whatever `body` adds, then a reset.
    pub fn run(self, style: &str, body: impl FnOnce(Self) -> Self) -> Self {
        body(self.control(style)).control(RESET)
    }

    /// Visible columns appended so far.
    pub fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Remove CSI escape sequences, leaving only what the terminal would print.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goto_is_one_indexed_row_then_col() {
        assert_eq!(goto(3, 17), "\x1b[3;17f");
    }

    #[test]
    fn controls_have_no_width() {
        let line = StyledLine::new().control(BOLD).control(&sgr("38;2;1;2;3"));
        assert_eq!(line.width(), 0);
        assert!(!line.as_str().is_empty());
    }

    #[test]
    fn text_width_counts_columns_not_bytes() {
        let line = StyledLine::new().text("╭──").text("⚠");
        assert_eq!(line.width(), 4);
        assert!(line.as_str().len() > 4);
    }

    #[test]
    fn pad_to_never_shrinks() {
        let line = StyledLine::new().text("abcdef").pad_to(3);
        assert_eq!(line.as_str(), "abcdef");
        let line = StyledLine::new().text("ab").pad_to(5);
        assert_eq!(line.as_str(), "ab   ");
    }

    #[test]
    fn run_is_closed_by_reset() {
        let line = StyledLine::new().run(BLINK, |l| l.text("hi"));
        assert_eq!(line.as_str(), "\x1b[5mhi\x1b[0m");
        assert_eq!(line.width(), 2);
    }

    #[test]
    fn strip_ansi_keeps_visible_text() {
        let s = format!("{}{}x{}y", goto(1, 1), sgr("48;2;0;0;0"), RESET);
        assert_eq!(strip_ansi(&s), "xy");
    }
}
