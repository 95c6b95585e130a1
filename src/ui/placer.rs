//! Random, collision-free card placement.
//!
//! Each card gets a bounded number of random tries. A card that is larger
//! than the grid, or that finds no free spot within its tries, is dropped
//! for this refresh only. Earlier cards claim space first.

use rand::Rng;

use crate::constants::PLACEMENT_ATTEMPTS;
use crate::models::{CardSize, Grid, Placement};

/// True if a card at `a` would collide with an already placed card at `b`.
///
/// One extra row is counted under each card so vertically adjacent cards
/// always keep a blank line between them, whichever of the two is placed
/// first. Cards may sit side by side with no gap.
pub fn overlaps(a: (Placement, CardSize), b: (Placement, CardSize)) -> bool {
    let (pa, sa) = a;
    let (pb, sb) = b;
    pa.row + sa.height + 1 > pb.row
        && pa.row < pb.row + sb.height + 1
        && pa.col + sa.width > pb.col
        && pa.col < pb.col + sb.width
}

/// Assigns positions on one grid for one render pass.
#[derive(Debug, Clone)]
pub struct Placer {
    grid: Grid,
    attempts: usize,
}

impl Placer {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            attempts: PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the per-card retry budget.
    #[cfg(test)]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Place `sizes` in order. The result has one entry per input;
    /// `None` marks a card that was skipped.
    pub fn place<R: Rng + ?Sized>(&self, sizes: &[CardSize], rng: &mut R) -> Vec<Option<Placement>> {
        let mut placed: Vec<(Placement, CardSize)> = Vec::with_capacity(sizes.len());
        let mut spots = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let spot = self.find_spot(size, &placed, rng);
            if let Some(spot) = spot {
                placed.push((spot, size));
            }
            spots.push(spot);
        }
        spots
    }

    fn find_spot<R: Rng + ?Sized>(
        &self,
        size: CardSize,
        placed: &[(Placement, CardSize)],
        rng: &mut R,
    ) -> Option<Placement> {
        let max_row = self.grid.lines.checked_sub(size.height).filter(|&m| m >= 1)?;
        let max_col = self.grid.columns.checked_sub(size.width).filter(|&m| m >= 1)?;

        (0..self.attempts)
            .map(|_| Placement::new(rng.gen_range(1..=max_row), rng.gen_range(1..=max_col)))
            .find(|&spot| {
                placed
                    .iter()
                    .all(|&other| !overlaps((spot, size), other))
            })
    }
}
