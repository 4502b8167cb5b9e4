//! A fixed-size cell set packed into an unsigned integer.
//!
//! `BitBoard<T, N>` stores one bit per cell of an `N×N` grid inside `T`.
//! Cells are addressed by [`Coord`], so callers never deal with raw indices
//! and `N` must equal `BOARD_SIZE`.

use core::fmt;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// A fixed-size N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CAPACITY_CHECK: () = assert!(
        N == BOARD_SIZE as usize && N * N <= core::mem::size_of::<T>() * 8
    );

    /// Create an empty board.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::CAPACITY_CHECK;
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn bit(coord: Coord) -> T {
        let (row, col) = coord.index();
        T::one() << (row * N + col)
    }

    /// Whether `coord` is in the set.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        (self.bits & Self::bit(coord)) != T::zero()
    }

    /// Add `coord` to the set.
    #[inline]
    pub fn insert(&mut self, coord: Coord) {
        self.bits = self.bits | Self::bit(coord);
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Build a set from a list of cells.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::new();
        for c in cells {
            board.insert(c);
        }
        board
    }

    /// Iterator over the cells in the set, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |c| self.contains(*c))
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if (self.bits >> (r * N + c)) & T::one() != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{}", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
