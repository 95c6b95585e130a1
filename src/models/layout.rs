/// Terminal grid available for one render pass, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub lines: usize,
    pub columns: usize,
}

impl Grid {
    pub fn new(lines: usize, columns: usize) -> Self {
        Self { lines, columns }
    }
}

/// A card's footprint. Computed once per item and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSize {
    pub width: usize,
    pub height: usize,
}

impl CardSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Accepted top-left anchor of a card, 1-indexed like cursor addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
