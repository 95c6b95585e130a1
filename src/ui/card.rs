//! Bordered card rendering.
//!
//! ```text
//! ╭── CENTRAL ───────────────╮
//! │ ⚠ SEVERE ⚠ Severe delays │
//! │ on the whole line.       │
//! ╰──────────────────────────╯
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::{BADGE_TEXT, MIN_CARD_WIDTH};
use crate::models::Placement;

use super::ansi::{goto, StyledLine, BLINK, BOLD, RESET};
use super::metrics::content_width;
use super::theme::ColorStyle;
use super::wrap::wrap_card_text;

/// Columns of a titled top border besides the title and the fill:
/// `╭── ` before the title, ` ──` after it and the closing `╮`.
const TITLE_FRAME_COLS: usize = 8;

/// Renders cards of one width in one color style.
#[derive(Debug, Clone, Copy)]
pub struct CardRenderer<'a> {
    style: &'a ColorStyle,
    width: usize,
}

impl<'a> CardRenderer<'a> {
    pub fn new(style: &'a ColorStyle, width: usize) -> Self {
        Self {
            style,
            width: width.max(MIN_CARD_WIDTH),
        }
    }

    /// The card's rows, top border to bottom border, without positioning.
    /// `None` or an empty title renders a plain top border.
    pub fn lines(&self, title: Option<&str>, body: &str, urgent: bool) -> Vec<StyledLine> {
        let wrapped = wrap_card_text(body, content_width(self.width), urgent);

        let mut lines = Vec::with_capacity(wrapped.len() + 2);
        lines.push(self.top_border(title.filter(|t| !t.is_empty())));
        for (i, text) in wrapped.iter().enumerate() {
            lines.push(self.content_line(text, urgent && i == 0));
        }
        lines.push(self.bottom_border());
        lines
    }

    /// The card as cursor-addressed output with its top-left corner at `at`.
    pub fn render(&self, title: Option<&str>, body: &str, urgent: bool, at: Placement) -> String {
        let mut out = String::new();
        for (i, line) in self.lines(title, body, urgent).into_iter().enumerate() {
            out.push_str(&goto(at.row + i, at.col));
            out.push_str(&line.into_string());
        }
        out
    }

    fn top_border(&self, title: Option<&str>) -> StyledLine {
        let theme = self.style.sgr();
        let room = self.width.saturating_sub(TITLE_FRAME_COLS);
        let title = title
            .map(|t| truncate_to_width(t, room))
            .filter(|t| !t.is_empty());
        match title.as_deref() {
            Some(title) => {
                let fill = self.width.saturating_sub(title.width() + TITLE_FRAME_COLS);
                StyledLine::new().run(&theme, |line| {
                    line.text("╭── ")
                        .run(BOLD, |l| l.text(title))
                        .control(&theme)
                        .text(" ──")
                        .fill('─', fill)
                        .text("╮")
                })
            }
            None => StyledLine::new().run(&theme, |line| {
                line.text("╭").fill('─', self.width - 2).text("╮")
            }),
        }
    }

    fn content_line(&self, text: &str, badge: bool) -> StyledLine {
        let theme = self.style.sgr();
        // Left frame and padding take two columns before the content area.
        let content_end = 2 + content_width(self.width);
        StyledLine::new().run(&theme, |line| {
            let mut line = line.text("│ ");
            if badge {
                line = line
                    .run(BLINK, |l| l.control(&self.style.foreground_sgr()).text(BADGE_TEXT))
                    .control(&theme)
                    .text(" ");
            }
            line.text(text).pad_to(content_end).text(" │")
        })
    }

    fn bottom_border(&self) -> StyledLine {
        StyledLine::new().run(&self.style.sgr(), |line| {
            line.text("╰").fill('─', self.width - 2).text("╯")
        })
    }
}

/// Cut `s` to at most `max` columns, ending in `…` when anything was cut.
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(1);
    if budget == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
