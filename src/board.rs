//! Record of the shots a player has fired at the opponent.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Result marker for one cell of the shot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackCell {
    NotAttacked,
    Hit,
    Miss,
}

/// Shot grid, stored as two disjoint bit sets.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create a board with every cell `NotAttacked`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, coord: Coord) -> AttackCell {
        if self.hits.contains(coord) {
            AttackCell::Hit
        } else if self.misses.contains(coord) {
            AttackCell::Miss
        } else {
            AttackCell::NotAttacked
        }
    }

    pub fn is_attacked(&self, coord: Coord) -> bool {
        self.cell(coord) != AttackCell::NotAttacked
    }

    /// Number of shots fired.
    pub fn shots(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }

    /// Number of shots that hit a ship.
    pub fn hits(&self) -> usize {
        self.hits.count_ones()
    }

    /// Cells marked `Hit`.
    pub fn hit_cells(&self) -> BB {
        self.hits
    }

    /// Cells marked `Miss`.
    pub fn miss_cells(&self) -> BB {
        self.misses
    }

    /// Write a result into an unattacked cell. Callers check `is_attacked` first.
    pub(crate) fn mark(&mut self, coord: Coord, hit: bool) {
        debug_assert!(!self.is_attacked(coord));
        if hit {
            self.hits.insert(coord);
        } else {
            self.misses.insert(coord);
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  hits: {:?},\n  misses: {:?}\n}}",
            self.hits, self.misses
        )
    }
}
