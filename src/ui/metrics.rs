//! Card sizing. Must agree row-for-row with [`super::card::CardRenderer`].

use unicode_width::UnicodeWidthStr;

use crate::constants::{CARD_FRAME_COLS, CARD_FRAME_ROWS, MIN_CARD_WIDTH};
use crate::models::CardSize;

use super::wrap::wrap_card_text;

/// Columns available for text inside a card of `width`.
pub fn content_width(width: usize) -> usize {
    width.max(MIN_CARD_WIDTH) - CARD_FRAME_COLS
}

/// Rendered rows of a card: wrapped body lines plus top and bottom borders.
pub fn card_height(text: &str, width: usize, urgent: bool) -> usize {
    wrap_card_text(text, content_width(width), urgent).len() + CARD_FRAME_ROWS
}

/// Footprint of a card with a fixed target width.
pub fn card_size(text: &str, width: usize, urgent: bool) -> CardSize {
    let width = width.max(MIN_CARD_WIDTH);
    CardSize::new(width, card_height(text, width, urgent))
}

/// Narrowest width that holds `text` on a single line.
pub fn hugging_width(text: &str) -> usize {
    (text.width() + CARD_FRAME_COLS).max(MIN_CARD_WIDTH)
}
