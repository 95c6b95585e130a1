//! Single centred message shown between refreshes ("Checking...", errors).

use unicode_width::UnicodeWidthStr;

use crate::models::Grid;

use super::ansi::{goto, StyledLine, CLEAR_SCREEN};

/// Clear the screen and centre `msg` on the middle row.
pub fn status_screen(msg: &str, grid: Grid) -> String {
    let col = (grid.columns.saturating_sub(msg.width()) / 2).max(1);
    let row = (grid.lines / 2).max(1);
    let line = StyledLine::new().control(&goto(row, col)).text(msg);
    format!("{}{}", CLEAR_SCREEN, line.into_string())
}
